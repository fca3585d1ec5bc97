//! Security state model.

/// Snapshot of the current authentication and authorization state.
///
/// Holds the authenticated flag plus the role, group and permission sets.
/// Membership is exact string equality and each set is duplicate-free.
/// The mutable, observable container is
/// [`SecurityService`](crate::security::service::SecurityService); a
/// `SecurityState` on its own is a plain value, mostly useful as the input
/// to predicate evaluation and in tests.
///
/// # Example
/// ```
/// use secview_core::security::state::SecurityState;
///
/// let state = SecurityState::new()
///     .authenticated(true)
///     .roles(&["ADMIN", "USER"])
///     .permissions(&["users:read"]);
///
/// assert!(state.is_authenticated());
/// assert!(state.has_role("ADMIN"));
/// assert!(!state.has_permission("users:write"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityState {
    authenticated: bool,
    roles: Vec<String>,
    groups: Vec<String>,
    permissions: Vec<String>,
}

impl SecurityState {
    /// Creates an anonymous state with empty role, group and permission sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authenticated flag (builder pattern).
    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Adds roles (builder pattern). Duplicates are ignored.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        for role in roles {
            push_unique(&mut self.roles, role);
        }
        self
    }

    /// Adds groups (builder pattern). Duplicates are ignored.
    pub fn groups(mut self, groups: &[&str]) -> Self {
        for group in groups {
            push_unique(&mut self.groups, group);
        }
        self
    }

    /// Adds permissions (builder pattern). Duplicates are ignored.
    pub fn permissions(mut self, permissions: &[&str]) -> Self {
        for permission in permissions {
            push_unique(&mut self.permissions, permission);
        }
        self
    }

    /// Returns true if the subject is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the role set.
    pub fn get_roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns the group set.
    pub fn get_groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns the permission set.
    pub fn get_permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Checks membership of a single role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Checks membership of a single group.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Checks membership of a single permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub(crate) fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    pub(crate) fn set_roles(&mut self, roles: Vec<String>) {
        self.roles = dedup(roles);
    }

    pub(crate) fn set_groups(&mut self, groups: Vec<String>) {
        self.groups = dedup(groups);
    }

    pub(crate) fn set_permissions(&mut self, permissions: Vec<String>) {
        self.permissions = dedup(permissions);
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

// First occurrence wins; order is preserved.
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
