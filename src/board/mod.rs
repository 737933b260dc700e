//! Message board persistence for the message board crate.
//!
//! This module implements the data-access layer behind a simple message
//! board: a single [`domain::Message`] entity, the validation rule guarding
//! its text, and the store that creates, lists, and deletes messages through
//! a scoped persistence session. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
