//! Domain model for the message board.
//!
//! The board stores one entity type, [`Message`], keyed by a caller-supplied
//! [`MessageId`]. Seed data for deterministic fixtures lives alongside the
//! entity so that every adapter seeds from the same source.

mod ids;
mod message;
mod seed;

pub use ids::MessageId;
pub use message::Message;
pub use seed::seed_messages;
