//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use message_board::board::adapters::postgres::PostgresMessageDatabase;
use rstest::fixture;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Boxed error type used by fixtures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the server used for integration tests.
pub const DATABASE_URL_ENV: &str = "MESSAGE_BOARD_TEST_DATABASE_URL";

/// SQL creating the `messages` table.
pub const CREATE_MESSAGES_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_messages/up.sql");

/// Points every pooled connection at the test schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Throwaway schema holding a migrated `messages` table.
///
/// The schema is dropped when the context goes out of scope.
pub struct SchemaContext {
    url: String,
    schema: String,
    /// Database handle scoped to the schema.
    pub database: PostgresMessageDatabase,
    /// Runtime driving the async store calls.
    pub rt: Runtime,
}

impl Drop for SchemaContext {
    fn drop(&mut self) {
        if let Ok(mut conn) = PgConnection::establish(&self.url) {
            drop(conn.batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema)));
        }
    }
}

/// Creates a multi-threaded runtime for blocking-pool Diesel calls.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Creates a migrated schema and a database handle scoped to it.
///
/// # Errors
///
/// Returns an error if `MESSAGE_BOARD_TEST_DATABASE_URL` is unset or the
/// schema cannot be prepared.
pub fn prepare_schema() -> Result<SchemaContext, BoxError> {
    let url = std::env::var(DATABASE_URL_ENV)
        .map_err(|err| format!("{DATABASE_URL_ENV} must name a PostgreSQL server: {err}"))?;
    let schema = format!("message_board_test_{}", Uuid::new_v4().simple());

    let mut conn = PgConnection::establish(&url)?;
    conn.batch_execute(&format!(
        "CREATE SCHEMA {schema}; SET search_path TO {schema}; {CREATE_MESSAGES_SQL}"
    ))?;

    let pool = Pool::builder()
        .max_size(2)
        .connection_customizer(Box::new(SearchPath(schema.clone())))
        .build(ConnectionManager::<PgConnection>::new(url.clone()))?;

    Ok(SchemaContext {
        url,
        schema,
        database: PostgresMessageDatabase::new(pool),
        rt: test_runtime()?,
    })
}

/// Fixture yielding a prepared schema.
///
/// Panics when no server is configured, so an ignored test run with
/// `--ignored` never passes vacuously.
#[fixture]
pub fn schema_context() -> SchemaContext {
    match prepare_schema() {
        Ok(context) => context,
        Err(err) => panic!("failed to prepare test schema: {err}"),
    }
}
