//! Predicate evaluator.
//!
//! Resolves predicate names through a [`PredicateSet`] and turns unknown
//! names into errors.

use std::fmt;
use std::sync::Arc;

use super::set::{DefaultPredicateSet, PredicateSet};
use super::Criterion;
use crate::security::state::SecurityState;

/// Error type for predicate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The predicate name is not known to the configured set.
    UnknownPredicate(String),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnknownPredicate(name) => {
                write!(f, "unknown predicate: '{}'", name)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Evaluates named predicates against a security state.
///
/// # Example
/// ```
/// use secview_core::security::predicate::{Criterion, PredicateEvaluator};
/// use secview_core::security::state::SecurityState;
///
/// let evaluator = PredicateEvaluator::new();
/// let state = SecurityState::new().roles(&["ADMIN"]);
///
/// let granted = evaluator
///     .evaluate("hasRoles", &Criterion::from("ADMIN"), &state)
///     .unwrap();
/// assert!(granted);
/// ```
pub struct PredicateEvaluator {
    set: Arc<dyn PredicateSet>,
}

impl PredicateEvaluator {
    /// Creates an evaluator over the built-in predicate table.
    pub fn new() -> Self {
        PredicateEvaluator {
            set: Arc::new(DefaultPredicateSet::new()),
        }
    }

    /// Creates an evaluator over a custom predicate set.
    pub fn with_set<S: PredicateSet + 'static>(set: S) -> Self {
        PredicateEvaluator { set: Arc::new(set) }
    }

    /// Evaluates a named predicate.
    ///
    /// # Returns
    /// * `Ok(true)` - Condition holds
    /// * `Ok(false)` - Condition does not hold
    /// * `Err(EvaluationError)` - The name is unknown to the set
    pub fn evaluate(
        &self,
        name: &str,
        criterion: &Criterion,
        state: &SecurityState,
    ) -> Result<bool, EvaluationError> {
        self.set
            .evaluate(name, criterion, state)
            .ok_or_else(|| EvaluationError::UnknownPredicate(name.to_string()))
    }
}

impl Default for PredicateEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PredicateEvaluator {
    fn clone(&self) -> Self {
        PredicateEvaluator {
            set: Arc::clone(&self.set),
        }
    }
}
