//! Persistence session port for the message collection.
//!
//! A session is a scoped unit of work against the backing store. Writes are
//! staged with [`MessageSession::add`] and [`MessageSession::remove`] and only
//! become visible after [`MessageSession::commit`]. Reads observe committed
//! state. [`MessageSession::discard`] and dropping the session both throw
//! away whatever is still staged.

use crate::board::domain::{Message, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Persistence session contract.
///
/// Methods take `&mut self`: a session runs one operation to completion
/// before the next begins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSession: Send {
    /// Stages an insert of `message`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the session can no longer
    /// reach the backing store.
    async fn add(&mut self, message: Message) -> SessionResult<()>;

    /// Finds a committed message by identifier.
    ///
    /// Returns `None` when the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the lookup fails.
    async fn find_by_id(&mut self, id: MessageId) -> SessionResult<Option<Message>>;

    /// Stages removal of the message with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the session can no longer
    /// reach the backing store.
    async fn remove(&mut self, id: MessageId) -> SessionResult<()>;

    /// Returns every committed message in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the listing fails.
    async fn list(&mut self) -> SessionResult<Vec<Message>>;

    /// Applies all staged changes atomically.
    ///
    /// The staged set is drained whether or not the commit succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateKey`] when a staged insert collides
    /// with an existing identifier, [`SessionError::MissingKey`] when a
    /// staged removal targets an absent identifier, or
    /// [`SessionError::Persistence`] on storage failure. No staged change is
    /// applied when an error is returned.
    async fn commit(&mut self) -> SessionResult<()>;

    /// Drops every change staged since the last commit without applying it.
    fn discard(&mut self);
}

/// Factory for persistence sessions.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Session type produced by this source.
    type Session: MessageSession;

    /// Opens a new session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the backing store cannot
    /// provide a session.
    async fn open_session(&self) -> SessionResult<Self::Session>;
}

/// Errors returned by session implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// A staged insert collided with an existing identifier.
    #[error("duplicate message identifier: {0}")]
    DuplicateKey(MessageId),

    /// A staged removal targeted an identifier that does not exist.
    #[error("no message with identifier: {0}")]
    MissingKey(MessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
