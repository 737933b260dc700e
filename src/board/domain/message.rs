//! Message entity stored on the board.

use super::MessageId;
use serde::{Deserialize, Serialize};

/// A message posted to the board.
///
/// Construction does not validate the text; callers run
/// [`crate::board::validation::validate`] (or let
/// [`crate::board::services::MessageStore::add_message`] do it) before
/// persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
}

impl Message {
    /// Creates a message with the given identifier and text.
    #[must_use]
    pub fn new(id: impl Into<MessageId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the message, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
