//! Message board: persistence layer for a minimal message board.
//!
//! This crate provides the data-access core behind a message board: one
//! validated message entity, a create/read/delete store over the message
//! collection, and deterministic seed data for test fixtures.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`board`]: Message entity, validation, persistence sessions, and store

pub mod board;
