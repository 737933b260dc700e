//! Validation rule implementations.
//!
//! Rules are pure functions over a message. Each rule reports at most one
//! [`Violation`]; the entry points collect them without failing fast.

use super::{ValidationConfig, Violation};
use crate::board::domain::Message;

const TEXT_FIELD: &str = "Text";

/// Validates a message against the default configuration.
///
/// Returns an empty list when the message is valid.
///
/// # Examples
///
/// ```
/// use message_board::board::domain::Message;
/// use message_board::board::validation::validate;
///
/// assert!(validate(&Message::new(1, "Hello")).is_empty());
///
/// let violations = validate(&Message::new(2, "a".repeat(251)));
/// assert_eq!(
///     violations.first().map(ToString::to_string).as_deref(),
///     Some("There's a 250 character limit on messages. Please shorten your message."),
/// );
/// ```
#[must_use]
pub fn validate(message: &Message) -> Vec<Violation> {
    validate_with(message, &ValidationConfig::default())
}

/// Validates a message against the given configuration.
///
/// Returns an empty list when the message is valid.
#[must_use]
pub fn validate_with(message: &Message, config: &ValidationConfig) -> Vec<Violation> {
    validate_text(message.text(), config).into_iter().collect()
}

/// Validates the text field.
///
/// A present value is checked against the length limit; an absent one is
/// reported as required, never as too long.
#[must_use]
pub fn validate_text(text: &str, config: &ValidationConfig) -> Option<Violation> {
    if text.trim().is_empty() {
        return Some(Violation::Required { field: TEXT_FIELD });
    }

    let actual = text.chars().count();
    if actual > config.max_text_length {
        return Some(Violation::TooLong {
            field: TEXT_FIELD,
            limit: config.max_text_length,
            actual,
        });
    }

    None
}
