//! In-memory adapters for message board tests.

mod session;

pub use session::{InMemoryMessageDatabase, InMemorySession};
