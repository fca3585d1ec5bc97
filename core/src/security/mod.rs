//! Reactive security state and view guards.
//!
//! # Module Structure
//!
//! - `state` - The [`SecurityState`] value object (authenticated flag, roles,
//!   groups, permissions)
//! - `service` - [`SecurityService`], the observable state container, and
//!   [`Subscription`] tokens
//! - `predicate` - Named predicate table ([`PredicateSet`],
//!   [`DefaultPredicateSet`]) and [`PredicateEvaluator`]
//! - `render` - The [`ViewHost`] capability trait and
//!   [`ConditionalRenderer`]
//! - `binding` - Binding expression parser and [`SecurityBinding`], the
//!   declarative directive layer

// Re-exports for convenience
pub use binding::{BindingBuilder, BindingError, BindingExpression, ParseError, SecurityBinding};
pub use predicate::{
    Criterion, DefaultPredicateSet, EvaluationError, PredicateEvaluator, PredicateSet,
};
pub use render::{BufferHandle, BufferHost, ConditionalRenderer, Predicate, RenderState, ViewHost};
pub use service::{SecurityService, Subscription};
pub use state::SecurityState;

pub mod binding;
pub mod predicate;
pub mod render;
pub mod service;
pub mod state;
