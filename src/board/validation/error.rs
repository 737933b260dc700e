//! Violation and error types for message validation.

use thiserror::Error;

/// A single validation failure on a message field.
///
/// The [`std::fmt::Display`] output is the human-readable message shown to
/// users and asserted on verbatim by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required field is empty or whitespace-only.
    #[error("The {field} field is required.")]
    Required {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeds the configured character limit.
    #[error("There's a {limit} character limit on messages. Please shorten your message.")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Configured maximum length in characters.
        limit: usize,
        /// Actual length in characters.
        actual: usize,
    },
}

impl Violation {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::TooLong { field, .. } => *field,
        }
    }

    /// Returns the user-facing text shown to whoever submitted the message.
    ///
    /// This is the stable accessor for that wording. It renders the same
    /// text as `Display`, but callers that surface violations to users
    /// should read it from here rather than depending on the formatting
    /// impl.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Error returned when a message fails validation.
///
/// Always carries at least one [`Violation`], in the order the rules
/// reported them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message failed validation: {}", render(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wraps a violation list, returning `None` when the list is empty.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Returns the violations in reporting order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the error, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
