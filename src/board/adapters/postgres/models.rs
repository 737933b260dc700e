//! Diesel row models for message persistence.

use super::schema::messages;
use crate::board::domain::{Message, MessageId};
use diesel::prelude::*;

/// Row in the `messages` table, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Message identifier.
    pub id: i32,
    /// Message text.
    pub text: String,
}

impl From<&Message> for MessageRow {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().into_inner(),
            text: message.text().to_owned(),
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self::new(MessageId::new(row.id), row.text)
    }
}
