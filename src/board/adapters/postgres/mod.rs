//! `PostgreSQL` adapters for message board persistence.

mod models;
mod schema;
mod session;

pub use session::{MessagePgPool, PostgresMessageDatabase, PostgresSession};
