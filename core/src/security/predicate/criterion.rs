//! Criterion values passed to predicate evaluation.

use std::slice;

/// The value(s) a predicate is evaluated against.
///
/// A single string is treated as a one-element list, so
/// `Criterion::from("ADMIN")` and `Criterion::many(vec!["ADMIN"])` evaluate
/// identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// No criterion supplied.
    None,
    /// A single value.
    One(String),
    /// An ordered list of values.
    Many(Vec<String>),
}

impl Criterion {
    /// Builds a single-value criterion.
    pub fn one(value: impl Into<String>) -> Self {
        Criterion::One(value.into())
    }

    /// Builds a list criterion.
    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::Many(values.into_iter().map(Into::into).collect())
    }

    /// Returns the criterion values as a slice.
    pub fn values(&self) -> &[String] {
        match self {
            Criterion::None => &[],
            Criterion::One(value) => slice::from_ref(value),
            Criterion::Many(values) => values,
        }
    }

    /// True when no values were supplied, including `Many(vec![])`.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Number of supplied values.
    pub fn len(&self) -> usize {
        self.values().len()
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Criterion::None
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Criterion::One(value.to_string())
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Criterion::One(value)
    }
}

impl From<Vec<String>> for Criterion {
    fn from(values: Vec<String>) -> Self {
        Criterion::Many(values)
    }
}

impl From<&[&str]> for Criterion {
    fn from(values: &[&str]) -> Self {
        Criterion::many(values.iter().copied())
    }
}
