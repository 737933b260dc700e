//! `PostgreSQL` session implementation for message persistence.

use super::{models::MessageRow, schema::messages};
use crate::board::{
    adapters::PendingChange,
    domain::{Message, MessageId},
    ports::{MessageSession, SessionError, SessionResult, SessionSource},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// `PostgreSQL` connection pool type used by message board adapters.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed message database.
#[derive(Debug, Clone)]
pub struct PostgresMessageDatabase {
    pool: MessagePgPool,
}

impl PostgresMessageDatabase {
    /// Creates a new database handle from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionSource for PostgresMessageDatabase {
    type Session = PostgresSession;

    async fn open_session(&self) -> SessionResult<Self::Session> {
        let pool = self.pool.clone();
        let connection = tokio::task::spawn_blocking(move || pool.get())
            .await
            .map_err(SessionError::persistence)?
            .map_err(SessionError::persistence)?;
        Ok(PostgresSession {
            connection: Some(connection),
            pending: Vec::new(),
        })
    }
}

/// Session holding one pooled `PostgreSQL` connection.
///
/// The connection returns to the pool when the session is dropped.
pub struct PostgresSession {
    connection: Option<PgPooledConnection>,
    pending: Vec<PendingChange>,
}

impl PostgresSession {
    async fn run_blocking<F, T>(&mut self, f: F) -> SessionResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SessionResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut connection = self.connection.take().ok_or_else(|| {
            SessionError::persistence(std::io::Error::other("session connection was lost"))
        })?;
        let (returned, result) = tokio::task::spawn_blocking(move || {
            let result = f(&mut connection);
            (connection, result)
        })
        .await
        .map_err(SessionError::persistence)?;
        self.connection = Some(returned);
        result
    }
}

#[async_trait]
impl MessageSession for PostgresSession {
    async fn add(&mut self, message: Message) -> SessionResult<()> {
        self.pending.push(PendingChange::Insert(message));
        Ok(())
    }

    async fn find_by_id(&mut self, id: MessageId) -> SessionResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .filter(messages::id.eq(id.into_inner()))
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()
                .map_err(SessionError::persistence)?;
            Ok(row.map(Message::from))
        })
        .await
    }

    async fn remove(&mut self, id: MessageId) -> SessionResult<()> {
        self.pending.push(PendingChange::Remove(id));
        Ok(())
    }

    async fn list(&mut self) -> SessionResult<Vec<Message>> {
        self.run_blocking(move |connection| {
            let rows = messages::table
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(SessionError::persistence)?;
            Ok(rows.into_iter().map(Message::from).collect())
        })
        .await
    }

    fn discard(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        debug!(changes = dropped, "discarded staged postgres changes");
    }

    async fn commit(&mut self) -> SessionResult<()> {
        let changes = std::mem::take(&mut self.pending);
        let count = changes.len();
        self.run_blocking(move |connection| {
            connection
                .transaction::<(), CommitError, _>(|tx| {
                    for change in &changes {
                        apply_change(tx, change)?;
                    }
                    Ok(())
                })
                .map_err(SessionError::from)
        })
        .await?;

        debug!(changes = count, "committed postgres session");
        Ok(())
    }
}

fn apply_change(connection: &mut PgConnection, change: &PendingChange) -> Result<(), CommitError> {
    match change {
        PendingChange::Insert(message) => {
            let id = message.id();
            diesel::insert_into(messages::table)
                .values(MessageRow::from(message))
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CommitError::Session(SessionError::DuplicateKey(id))
                    }
                    other => CommitError::Database(other),
                })?;
        }
        PendingChange::Remove(id) => {
            let removed =
                diesel::delete(messages::table.filter(messages::id.eq(id.into_inner())))
                    .execute(connection)?;
            if removed == 0 {
                return Err(CommitError::Session(SessionError::MissingKey(*id)));
            }
        }
    }
    Ok(())
}

/// Failure raised inside a commit transaction.
///
/// Diesel requires the transaction error to absorb its own error type, so
/// domain-level session failures travel alongside raw database errors.
#[derive(Debug)]
enum CommitError {
    Session(SessionError),
    Database(DieselError),
}

impl From<DieselError> for CommitError {
    fn from(err: DieselError) -> Self {
        Self::Database(err)
    }
}

impl From<CommitError> for SessionError {
    fn from(err: CommitError) -> Self {
        match err {
            CommitError::Session(session_err) => session_err,
            CommitError::Database(db_err) => Self::persistence(db_err),
        }
    }
}
