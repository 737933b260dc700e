//! Port contracts for message board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the message
//! store.

pub mod session;

pub use session::{MessageSession, SessionError, SessionResult, SessionSource};

#[cfg(test)]
pub use session::MockMessageSession;
