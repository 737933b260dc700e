//! Identifier types for the message board domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored message.
///
/// Identifiers are supplied by the caller and map onto an `INTEGER` primary
/// key in relational storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i32);

impl MessageId {
    /// Creates a message identifier from a raw integer.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for MessageId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
