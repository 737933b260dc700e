//! Adapter implementations for message board persistence.

use crate::board::domain::{Message, MessageId};

pub mod memory;
pub mod postgres;

/// A write staged on a session and applied at commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingChange {
    Insert(Message),
    Remove(MessageId),
}
