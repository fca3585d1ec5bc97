//! Predicate table trait and the default implementation.

use super::Criterion;
use crate::security::state::SecurityState;

/// Trait mapping predicate names to boolean evaluations.
///
/// Implement this trait to add custom predicates; delegate to
/// [`DefaultPredicateSet`] for the built-in names (see the module docs for
/// an example).
pub trait PredicateSet: Send + Sync {
    /// Evaluates a named predicate.
    ///
    /// # Arguments
    /// * `name` - The predicate name (e.g., "hasRoles")
    /// * `criterion` - The caller-supplied value(s) to check against
    /// * `state` - The security state to evaluate in
    ///
    /// # Returns
    /// * `Some(true)` / `Some(false)` - Evaluation result
    /// * `None` - Unknown predicate name (will result in an error)
    fn evaluate(&self, name: &str, criterion: &Criterion, state: &SecurityState) -> Option<bool>;
}

/// The built-in predicate table.
///
/// - `isAuthenticated` / `isAnonymous` - authentication flag
/// - `hasRoles` - every criterion value present in the role set
/// - `hasNotRoles` - no criterion value present in the role set
/// - `hasAnyRoles` - at least one criterion value present in the role set
/// - `isMemberOf` / `isNotMemberOf` / `isMemberOfAny` - same over groups
/// - `hasPermissions` / `hasNotPermissions` / `hasAnyPermissions` - same
///   over permissions
#[derive(Debug, Clone, Default)]
pub struct DefaultPredicateSet;

impl DefaultPredicateSet {
    /// Creates the default predicate set.
    pub fn new() -> Self {
        DefaultPredicateSet
    }
}

impl PredicateSet for DefaultPredicateSet {
    fn evaluate(&self, name: &str, criterion: &Criterion, state: &SecurityState) -> Option<bool> {
        match name {
            // Authentication flag
            "isAuthenticated" => Some(state.is_authenticated()),
            "isAnonymous" => Some(!state.is_authenticated()),

            // Role-based predicates
            "hasRoles" => Some(all_of(criterion, |v| state.has_role(v))),
            "hasNotRoles" => Some(none_of(criterion, |v| state.has_role(v))),
            "hasAnyRoles" => Some(any_of(criterion, |v| state.has_role(v))),

            // Group-based predicates
            "isMemberOf" => Some(all_of(criterion, |v| state.has_group(v))),
            "isNotMemberOf" => Some(none_of(criterion, |v| state.has_group(v))),
            "isMemberOfAny" => Some(any_of(criterion, |v| state.has_group(v))),

            // Permission-based predicates
            "hasPermissions" => Some(all_of(criterion, |v| state.has_permission(v))),
            "hasNotPermissions" => Some(none_of(criterion, |v| state.has_permission(v))),
            "hasAnyPermissions" => Some(any_of(criterion, |v| state.has_permission(v))),

            // Unknown predicate
            _ => None,
        }
    }
}

// An empty all-of or any-of criterion never grants: both are false, not
// vacuously true. none-of stays the exact negation of any-of.

fn all_of<F>(criterion: &Criterion, mut member: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    if criterion.is_empty() {
        return false;
    }
    criterion.values().iter().all(|v| member(v))
}

fn any_of<F>(criterion: &Criterion, mut member: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    if criterion.is_empty() {
        return false;
    }
    criterion.values().iter().any(|v| member(v))
}

fn none_of<F>(criterion: &Criterion, mut member: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    criterion.values().iter().all(|v| !member(v))
}
