//! Declarative directive bindings.
//!
//! A binding pairs a directive name (a predicate from
//! [`predicate`](crate::security::predicate)) with a binding expression and
//! a view location. The expression carries the criterion and an optional
//! fallback reference:
//!
//! ```text
//! 'ADMIN'
//! ['ADMIN', 'AUDIT']
//! 'ADMIN'; else denied
//! ; else denied
//! ```
//!
//! [`SecurityBinding`] wires the parsed expression into a
//! [`ConditionalRenderer`](crate::security::render::ConditionalRenderer) and
//! a [`SecurityService`](crate::security::service::SecurityService)
//! subscription: the initial render happens at bind time from the current
//! state, every later state change re-evaluates, and dropping the binding
//! detaches the fragment and releases the subscription.

mod directive;
mod parser;

pub use directive::{BindingBuilder, BindingError, SecurityBinding};
pub use parser::{BindingExpression, ParseError};
