//! Application services for the message board.

mod store;

pub use store::{MessageStore, MessageStoreError, MessageStoreResult};
