//! Message validation.
//!
//! Validation is a pure step, independent of any store: rules inspect a
//! [`crate::board::domain::Message`] and report every [`Violation`] they
//! find. [`crate::board::services::MessageStore`] runs the same rules before
//! persisting and surfaces failures as a [`ValidationError`].

mod config;
mod error;
pub mod rules;

pub use config::{DEFAULT_MAX_TEXT_LENGTH, ValidationConfig};
pub use error::{ValidationError, Violation};
pub use rules::{validate, validate_with};
