//! Integration tests for the directive bindings.
//!
//! Each test builds a guarded region with a primary "OK" fragment and a
//! registered "elseTpl" fragment, mutates the security state and checks
//! what ends up on screen.

use secview_core::security::binding::{BindingError, SecurityBinding};
use secview_core::security::render::{BufferHandle, BufferHost};
use secview_core::security::service::SecurityService;

struct Harness {
    security: SecurityService,
    screen: BufferHandle,
    binding: SecurityBinding<BufferHost>,
}

fn instantiate(directive: &str, expression: &str) -> Harness {
    let security = SecurityService::new();
    let host = BufferHost::new();
    let screen = host.handle();

    let binding = SecurityBinding::builder(&security, host)
        .directive(directive)
        .expression(expression)
        .primary("OK".to_string())
        .fragment("elseTpl", "ELSE".to_string())
        .bind()
        .expect("binding setup");

    Harness {
        security,
        screen,
        binding,
    }
}

impl Harness {
    fn expect_visible(&self, name: &str) {
        assert_eq!(self.screen.current().as_deref(), Some(name));
    }

    fn expect_hidden(&self, name: &str) {
        assert_ne!(self.screen.current().as_deref(), Some(name));
    }
}

// =============================================================================
// isAuthenticated / isAnonymous
// =============================================================================

#[test]
fn is_authenticated_hides_element_when_not_authenticated() {
    let t = instantiate("isAuthenticated", "");
    t.security.set_authenticated(false);
    t.expect_hidden("OK");
}

#[test]
fn is_authenticated_shows_element_when_authenticated() {
    let t = instantiate("isAuthenticated", "");
    t.security.set_authenticated(true);
    t.expect_visible("OK");
}

#[test]
fn is_authenticated_toggles_when_switching() {
    let t = instantiate("isAuthenticated", "");

    t.security.set_authenticated(true);
    t.expect_visible("OK");

    t.security.set_authenticated(false);
    t.expect_hidden("OK");
}

#[test]
fn is_anonymous_hides_element_when_authenticated() {
    let t = instantiate("isAnonymous", "");
    t.security.set_authenticated(true);
    t.expect_hidden("OK");
}

#[test]
fn is_anonymous_shows_element_when_anonymous() {
    let t = instantiate("isAnonymous", "");
    t.security.set_authenticated(false);
    t.expect_visible("OK");
}

// =============================================================================
// hasRoles / hasNotRoles / hasAnyRoles
// =============================================================================

#[test]
fn has_roles_hides_element_on_partial_match() {
    let t = instantiate("hasRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn has_roles_shows_element_on_full_match() {
    let t = instantiate("hasRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["X", "Y", "Z"]);
    t.expect_visible("OK");
}

#[test]
fn has_roles_swaps_with_else_template() {
    let t = instantiate("hasRoles", "'X'; else elseTpl");

    t.security.set_roles(vec!["A"]);
    t.expect_hidden("OK");
    t.expect_visible("ELSE");

    t.security.set_roles(vec!["X", "Y", "Z"]);
    t.expect_visible("OK");
    t.expect_hidden("ELSE");
}

#[test]
fn has_not_roles_hides_element_on_overlap() {
    let t = instantiate("hasNotRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn has_not_roles_shows_element_when_disjoint() {
    let t = instantiate("hasNotRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["A", "B", "C"]);
    t.expect_visible("OK");
}

#[test]
fn has_not_roles_swaps_with_else_template() {
    let t = instantiate("hasNotRoles", "'X'; else elseTpl");

    t.security.set_roles(vec!["X"]);
    t.expect_hidden("OK");
    t.expect_visible("ELSE");

    t.security.set_roles(vec!["A", "B", "C"]);
    t.expect_visible("OK");
    t.expect_hidden("ELSE");
}

#[test]
fn has_any_roles_hides_element_when_disjoint() {
    let t = instantiate("hasAnyRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["A"]);
    t.expect_hidden("OK");
}

#[test]
fn has_any_roles_shows_element_on_single_match() {
    let t = instantiate("hasAnyRoles", "['X', 'Y', 'Z']");
    t.security.set_roles(vec!["X"]);
    t.expect_visible("OK");
}

#[test]
fn has_any_roles_swaps_with_else_template() {
    let t = instantiate("hasAnyRoles", "'X'; else elseTpl");

    t.security.set_roles(vec!["A"]);
    t.expect_hidden("OK");
    t.expect_visible("ELSE");

    t.security.set_roles(vec!["X"]);
    t.expect_visible("OK");
    t.expect_hidden("ELSE");
}

// =============================================================================
// isMemberOf / isNotMemberOf / isMemberOfAny
// =============================================================================

#[test]
fn is_member_of_hides_element_on_partial_match() {
    let t = instantiate("isMemberOf", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn is_member_of_shows_element_on_full_match() {
    let t = instantiate("isMemberOf", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["X", "Y", "Z"]);
    t.expect_visible("OK");
}

#[test]
fn is_member_of_swaps_with_else_template() {
    let t = instantiate("isMemberOf", "'X'; else elseTpl");

    t.security.set_groups(vec!["A"]);
    t.expect_hidden("OK");
    t.expect_visible("ELSE");

    t.security.set_groups(vec!["X"]);
    t.expect_visible("OK");
    t.expect_hidden("ELSE");
}

#[test]
fn is_not_member_of_hides_element_on_overlap() {
    let t = instantiate("isNotMemberOf", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn is_not_member_of_shows_element_when_disjoint() {
    let t = instantiate("isNotMemberOf", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["A", "B", "C"]);
    t.expect_visible("OK");
}

#[test]
fn is_member_of_any_hides_element_when_disjoint() {
    let t = instantiate("isMemberOfAny", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["A"]);
    t.expect_hidden("OK");
}

#[test]
fn is_member_of_any_shows_element_on_single_match() {
    let t = instantiate("isMemberOfAny", "['X', 'Y', 'Z']");
    t.security.set_groups(vec!["X"]);
    t.expect_visible("OK");
}

// =============================================================================
// hasPermissions / hasNotPermissions / hasAnyPermissions
// =============================================================================

#[test]
fn has_permissions_hides_element_on_partial_match() {
    let t = instantiate("hasPermissions", "['X', 'Y', 'Z']; else elseTpl");
    t.security.set_permissions(vec!["X"]);
    t.expect_hidden("OK");
    t.expect_visible("ELSE");
}

#[test]
fn has_permissions_shows_element_on_full_match() {
    let t = instantiate("hasPermissions", "['X', 'Y', 'Z']; else elseTpl");
    t.security.set_permissions(vec!["X", "Y", "Z"]);
    t.expect_visible("OK");
}

#[test]
fn has_not_permissions_hides_element_on_overlap() {
    let t = instantiate("hasNotPermissions", "['X', 'Y', 'Z']");
    t.security.set_permissions(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn has_not_permissions_shows_element_when_disjoint() {
    let t = instantiate("hasNotPermissions", "['X', 'Y', 'Z']");
    t.security.set_permissions(vec!["A", "B", "C"]);
    t.expect_visible("OK");
}

#[test]
fn has_any_permissions_hides_element_when_disjoint() {
    let t = instantiate("hasAnyPermissions", "['X', 'Y', 'Z']");
    t.security.set_permissions(vec!["A"]);
    t.expect_hidden("OK");
}

#[test]
fn has_any_permissions_shows_element_on_single_match() {
    let t = instantiate("hasAnyPermissions", "['X', 'Y', 'Z']");
    t.security.set_permissions(vec!["X"]);
    t.expect_visible("OK");
}

// =============================================================================
// Missing Criterion
// =============================================================================

#[test]
fn has_roles_without_criterion_never_shows() {
    let t = instantiate("hasRoles", "");
    t.security.set_roles(vec!["X"]);
    t.expect_hidden("OK");
}

#[test]
fn has_any_roles_without_criterion_never_shows() {
    let t = instantiate("hasAnyRoles", "");
    t.security.set_roles(vec!["X"]);
    t.expect_hidden("OK");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn setter_idempotence_leaves_rendered_output_unchanged() {
    let t = instantiate("hasRoles", "'X'; else elseTpl");

    t.security.set_roles(vec!["X"]);
    t.expect_visible("OK");

    t.security.set_roles(vec!["X"]);
    t.expect_visible("OK");
}

#[test]
fn disposed_binding_ignores_further_changes() {
    let mut t = instantiate("isAuthenticated", "; else elseTpl");
    t.security.set_authenticated(true);
    t.expect_visible("OK");

    t.binding.dispose();
    assert!(t.screen.is_empty());

    t.security.set_authenticated(false);
    t.security.set_authenticated(true);
    assert!(t.screen.is_empty());
}

#[test]
fn dropped_binding_ignores_further_changes() {
    let t = instantiate("isAuthenticated", "");
    t.security.set_authenticated(true);
    t.expect_visible("OK");

    let Harness {
        security, screen, binding,
    } = t;
    drop(binding);

    assert!(screen.is_empty());
    security.set_authenticated(false);
    security.set_authenticated(true);
    assert!(screen.is_empty());
}

#[test]
fn unknown_directive_fails_to_bind() {
    let security = SecurityService::new();
    let result = SecurityBinding::builder(&security, BufferHost::new())
        .directive("hasClearance")
        .primary("OK".to_string())
        .bind();

    assert!(matches!(result, Err(BindingError::UnknownDirective(_))));
}

#[test]
fn two_bindings_track_the_same_service() {
    let security = SecurityService::new();

    let admin_host = BufferHost::new();
    let admin_screen = admin_host.handle();
    let _admin = SecurityBinding::builder(&security, admin_host)
        .directive("hasRoles")
        .expression("'ADMIN'")
        .primary("ADMIN AREA".to_string())
        .bind()
        .unwrap();

    let user_host = BufferHost::new();
    let user_screen = user_host.handle();
    let _user = SecurityBinding::builder(&security, user_host)
        .directive("hasAnyRoles")
        .expression("['ADMIN', 'USER']")
        .primary("USER AREA".to_string())
        .bind()
        .unwrap();

    security.set_roles(vec!["USER"]);
    assert!(admin_screen.is_empty());
    assert_eq!(user_screen.current().as_deref(), Some("USER AREA"));

    security.set_roles(vec!["ADMIN"]);
    assert_eq!(admin_screen.current().as_deref(), Some("ADMIN AREA"));
    assert_eq!(user_screen.current().as_deref(), Some("USER AREA"));
}
