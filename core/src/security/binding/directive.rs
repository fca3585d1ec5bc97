//! Directive binding: wires an expression into a renderer and a
//! subscription.

use std::collections::HashMap;
use std::sync::Arc;

use derive_more::{Display, Error};
use parking_lot::Mutex;
use tracing::warn;

use super::parser::{BindingExpression, ParseError};
use crate::security::predicate::{PredicateEvaluator, PredicateSet};
use crate::security::render::{ConditionalRenderer, Predicate, RenderState, ViewHost};
use crate::security::service::{SecurityService, Subscription};

/// Error type for binding construction.
#[derive(Debug, Display, Error)]
pub enum BindingError {
    /// The binding expression did not parse.
    #[display("invalid binding expression: {_0}")]
    Expression(ParseError),
    /// The directive name is not a known predicate.
    #[display("unknown directive: '{_0}'")]
    UnknownDirective(#[error(not(source))] String),
    /// The `else` reference does not name a registered fragment.
    #[display("unknown fragment reference: '{_0}'")]
    UnknownFragment(#[error(not(source))] String),
    /// No primary fragment was supplied.
    #[display("missing primary fragment")]
    MissingPrimary,
}

impl From<ParseError> for BindingError {
    fn from(err: ParseError) -> Self {
        BindingError::Expression(err)
    }
}

/// A live directive binding.
///
/// Created through [`SecurityBinding::builder`]. The binding renders once at
/// construction from the current state, then re-renders on every state
/// change. Dropping it (or calling
/// [`dispose`](SecurityBinding::dispose)) detaches the fragment and releases
/// the subscription, unconditionally.
///
/// # Example
/// ```
/// use secview_core::security::binding::SecurityBinding;
/// use secview_core::security::render::{BufferHost, RenderState};
/// use secview_core::security::service::SecurityService;
///
/// let security = SecurityService::new();
/// let host = BufferHost::new();
///
/// let binding = SecurityBinding::builder(&security, host)
///     .directive("isAuthenticated")
///     .primary("profile".to_string())
///     .bind()
///     .unwrap();
///
/// assert_eq!(binding.rendered(), RenderState::Detached);
/// security.set_authenticated(true);
/// assert_eq!(binding.rendered(), RenderState::Primary);
/// ```
pub struct SecurityBinding<H: ViewHost> {
    renderer: Arc<Mutex<ConditionalRenderer<H>>>,
    subscription: Option<Subscription>,
}

impl<H: ViewHost> SecurityBinding<H> {
    /// Starts building a binding against `service`, rendering into `host`.
    pub fn builder(service: &SecurityService, host: H) -> BindingBuilder<H> {
        BindingBuilder {
            service: service.clone(),
            host,
            directive: String::new(),
            expression: String::new(),
            evaluator: PredicateEvaluator::new(),
            primary: None,
            fragments: HashMap::new(),
        }
    }

    /// Returns what the binding currently shows.
    pub fn rendered(&self) -> RenderState {
        self.renderer.lock().rendered()
    }

    /// Detaches the fragment and releases the subscription. Idempotent;
    /// also runs on drop.
    pub fn dispose(&mut self) {
        self.subscription.take();
        self.renderer.lock().dispose();
    }
}

impl<H: ViewHost> Drop for SecurityBinding<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Builder for [`SecurityBinding`].
pub struct BindingBuilder<H: ViewHost> {
    service: SecurityService,
    host: H,
    directive: String,
    expression: String,
    evaluator: PredicateEvaluator,
    primary: Option<H::Fragment>,
    fragments: HashMap<String, H::Fragment>,
}

impl<H> BindingBuilder<H>
where
    H: ViewHost + Send + 'static,
    H::Fragment: Send + 'static,
{
    /// Sets the directive (predicate) name, e.g. `"hasRoles"`.
    pub fn directive(mut self, name: &str) -> Self {
        self.directive = name.to_string();
        self
    }

    /// Sets the binding expression, e.g. `"['ADMIN']; else denied"`.
    /// Defaults to the empty expression (no criterion, no fallback).
    pub fn expression(mut self, expression: &str) -> Self {
        self.expression = expression.to_string();
        self
    }

    /// Replaces the predicate table used for evaluation.
    pub fn predicates<S: PredicateSet + 'static>(mut self, set: S) -> Self {
        self.evaluator = PredicateEvaluator::with_set(set);
        self
    }

    /// Sets the primary fragment, shown while the condition holds.
    pub fn primary(mut self, fragment: H::Fragment) -> Self {
        self.primary = Some(fragment);
        self
    }

    /// Registers a named fragment, available to `else` references.
    pub fn fragment(mut self, name: &str, fragment: H::Fragment) -> Self {
        self.fragments.insert(name.to_string(), fragment);
        self
    }

    /// Parses, validates and wires the binding.
    ///
    /// Performs the initial render from the current state before
    /// subscribing, so the binding never shows a stale fragment.
    pub fn bind(self) -> Result<SecurityBinding<H>, BindingError> {
        let expression = BindingExpression::parse(&self.expression)?;
        let (criterion, else_ref) = expression.into_parts();

        let primary = self.primary.ok_or(BindingError::MissingPrimary)?;

        let mut fragments = self.fragments;
        let fallback = match else_ref {
            Some(name) => match fragments.remove(&name) {
                Some(fragment) => Some(fragment),
                None => return Err(BindingError::UnknownFragment(name)),
            },
            None => None,
        };

        // Unknown directive names are rejected here, not on a later
        // notification.
        let state = self.service.state();
        let directive_name = self.directive.clone();
        self.evaluator
            .evaluate(&self.directive, &criterion, &state)
            .map_err(|_| BindingError::UnknownDirective(directive_name))?;

        let evaluator = self.evaluator;
        let directive = self.directive;
        let predicate: Predicate = Box::new(move |state| {
            match evaluator.evaluate(&directive, &criterion, state) {
                Ok(result) => result,
                Err(err) => {
                    // Fail closed.
                    warn!(%err, "binding evaluation failed");
                    false
                }
            }
        });

        let renderer = Arc::new(Mutex::new(ConditionalRenderer::new(
            self.host, predicate, primary, fallback,
        )));
        renderer.lock().update(&state);

        let handle = Arc::clone(&renderer);
        let subscription = self.service.subscribe(move |state| {
            handle.lock().update(state);
        });

        Ok(SecurityBinding {
            renderer,
            subscription: Some(subscription),
        })
    }
}
