//! Named boolean predicates over the security state.
//!
//! # Overview
//! Every guard in this crate boils down to a named predicate evaluated
//! against the current [`SecurityState`](crate::security::state::SecurityState)
//! and a caller-supplied [`Criterion`].
//!
//! # Built-in Predicates
//! - `isAuthenticated` / `isAnonymous` - authentication flag checks, ignore
//!   the criterion
//! - `hasRoles` / `hasNotRoles` / `hasAnyRoles` - all-of / none-of / any-of
//!   over the role set
//! - `isMemberOf` / `isNotMemberOf` / `isMemberOfAny` - the same over the
//!   group set
//! - `hasPermissions` / `hasNotPermissions` / `hasAnyPermissions` - the same
//!   over the permission set
//!
//! An empty or missing criterion makes the all-of and any-of predicates
//! false, never vacuously true.
//!
//! # Extensibility
//! Custom predicates are added by implementing the [`PredicateSet`] trait
//! and handing the set to
//! [`PredicateEvaluator::with_set`]:
//!
//! ```
//! use secview_core::security::predicate::{
//!     Criterion, DefaultPredicateSet, PredicateSet,
//! };
//! use secview_core::security::state::SecurityState;
//!
//! struct CustomPredicates {
//!     default: DefaultPredicateSet,
//! }
//!
//! impl PredicateSet for CustomPredicates {
//!     fn evaluate(
//!         &self,
//!         name: &str,
//!         criterion: &Criterion,
//!         state: &SecurityState,
//!     ) -> Option<bool> {
//!         match name {
//!             "isAdmin" => Some(state.has_role("ADMIN")),
//!             _ => self.default.evaluate(name, criterion, state),
//!         }
//!     }
//! }
//! ```

mod criterion;
mod evaluator;
mod set;

pub use criterion::Criterion;
pub use evaluator::{EvaluationError, PredicateEvaluator};
pub use set::{DefaultPredicateSet, PredicateSet};
