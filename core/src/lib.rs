//! Security-state driven conditional rendering.
//!
//! `secview_core` keeps fragments of a view in sync with an application's
//! authentication and authorization state. It is host-agnostic: the actual
//! template engine or DOM layer is injected through the
//! [`ViewHost`](security::render::ViewHost) trait.
//!
//! # Overview
//!
//! - [`security::service::SecurityService`] — the reactive container holding
//!   the authenticated flag plus role, group and permission sets. Setters
//!   replace a whole field and synchronously notify subscribers.
//! - [`security::predicate`] — named boolean predicates over the state
//!   (`isAuthenticated`, `hasRoles`, `isMemberOfAny`, ...), evaluated against
//!   a caller-supplied criterion.
//! - [`security::render::ConditionalRenderer`] — keeps exactly one of two
//!   fragments (primary or fallback) attached to a view host, toggling only
//!   when the predicate result changes.
//! - [`security::binding::SecurityBinding`] — the declarative layer: a
//!   directive name plus a binding expression such as
//!   `"['ADMIN', 'AUDIT']; else denied"` wired into a renderer.
//!
//! # Example
//!
//! ```
//! use secview_core::security::binding::SecurityBinding;
//! use secview_core::security::render::BufferHost;
//! use secview_core::security::service::SecurityService;
//!
//! let security = SecurityService::new();
//!
//! let host = BufferHost::new();
//! let screen = host.handle();
//!
//! let _binding = SecurityBinding::builder(&security, host)
//!     .directive("hasRoles")
//!     .expression("'ADMIN'; else denied")
//!     .primary("admin panel".to_string())
//!     .fragment("denied", "access denied".to_string())
//!     .bind()
//!     .unwrap();
//!
//! assert_eq!(screen.current().as_deref(), Some("access denied"));
//!
//! security.set_roles(vec!["ADMIN"]);
//! assert_eq!(screen.current().as_deref(), Some("admin panel"));
//! ```

pub mod security;
