//! Observable security state container.
//!
//! [`SecurityService`] owns the current [`SecurityState`] and is the only way
//! to mutate it. Every setter replaces a whole field and synchronously
//! notifies all current subscribers, in subscription order, with the
//! post-mutation snapshot. Notification is delivered even when the new value
//! equals the old one.
//!
//! Dispatch runs to completion on the caller's thread. Handlers are invoked
//! outside the service locks, so a handler may read the service or drop its
//! own [`Subscription`]; calling a setter from inside a handler is not
//! supported.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::state::SecurityState;

type ChangeHandler = Arc<dyn Fn(&SecurityState) + Send + Sync>;

struct Subscriber {
    id: u64,
    handler: ChangeHandler,
}

struct ServiceInner {
    state: RwLock<SecurityState>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_id: AtomicU64,
}

/// Shared, observable authentication/authorization state.
///
/// Cloning is cheap and clones share the same underlying state.
///
/// # Example
/// ```
/// use secview_core::security::service::SecurityService;
///
/// let security = SecurityService::new();
/// security.set_authenticated(true);
/// security.set_roles(vec!["ADMIN"]);
///
/// assert!(security.is_authenticated());
/// assert!(security.has_role("ADMIN"));
/// ```
#[derive(Clone)]
pub struct SecurityService {
    inner: Arc<ServiceInner>,
}

impl SecurityService {
    /// Creates a service holding the default (anonymous, empty) state.
    pub fn new() -> Self {
        SecurityService {
            inner: Arc::new(ServiceInner {
                state: RwLock::new(SecurityState::default()),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SecurityState {
        self.inner.state.read().clone()
    }

    /// Returns true if the subject is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().is_authenticated()
    }

    /// Checks membership of a single role in the current state.
    pub fn has_role(&self, role: &str) -> bool {
        self.inner.state.read().has_role(role)
    }

    /// Checks membership of a single group in the current state.
    pub fn has_group(&self, group: &str) -> bool {
        self.inner.state.read().has_group(group)
    }

    /// Checks membership of a single permission in the current state.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.inner.state.read().has_permission(permission)
    }

    /// Sets the authenticated flag and notifies subscribers.
    pub fn set_authenticated(&self, authenticated: bool) {
        self.inner.state.write().set_authenticated(authenticated);
        debug!(authenticated, "security state updated");
        self.notify();
    }

    /// Replaces the role set and notifies subscribers.
    pub fn set_roles<I, S>(&self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        debug!(count = roles.len(), "roles replaced");
        self.inner.state.write().set_roles(roles);
        self.notify();
    }

    /// Replaces the group set and notifies subscribers.
    pub fn set_groups<I, S>(&self, groups: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: Vec<String> = groups.into_iter().map(Into::into).collect();
        debug!(count = groups.len(), "groups replaced");
        self.inner.state.write().set_groups(groups);
        self.notify();
    }

    /// Replaces the permission set and notifies subscribers.
    pub fn set_permissions<I, S>(&self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions: Vec<String> = permissions.into_iter().map(Into::into).collect();
        debug!(count = permissions.len(), "permissions replaced");
        self.inner.state.write().set_permissions(permissions);
        self.notify();
    }

    /// Restores the default state (anonymous, empty sets) and notifies
    /// subscribers. Single entry point for logout.
    pub fn reset(&self) {
        *self.inner.state.write() = SecurityState::default();
        debug!("security state reset");
        self.notify();
    }

    /// Registers a change handler.
    ///
    /// The handler receives the post-mutation snapshot on every state
    /// change. The returned [`Subscription`] releases the registration when
    /// dropped; a handler that outlives its owning view is a resource leak.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&SecurityState) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push(Subscriber {
            id,
            handler: Arc::new(handler),
        });
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn notify(&self) {
        let snapshot = self.inner.state.read().clone();
        // Handlers run outside the locks so they can query the service or
        // unsubscribe without deadlocking.
        let handlers: Vec<ChangeHandler> = {
            let subscribers = self.inner.subscribers.lock();
            subscribers.iter().map(|s| Arc::clone(&s.handler)).collect()
        };
        for handler in handlers {
            handler(&snapshot);
        }
    }
}

impl Default for SecurityService {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration token returned by [`SecurityService::subscribe`].
///
/// Unsubscribes on drop. Dropping after the service itself is gone is a
/// no-op.
pub struct Subscription {
    id: u64,
    inner: Weak<ServiceInner>,
}

impl Subscription {
    /// Explicitly releases the registration. Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.subscribers.lock().retain(|s| s.id != self.id);
        }
    }
}
