//! Data-access service for the message collection.
//!
//! Provides [`MessageStore`], which validates, creates, lists, and deletes
//! messages through a single bound [`MessageSession`], plus the seeding and
//! reset helpers used to build deterministic fixtures.

use crate::board::{
    domain::{Message, MessageId, seed_messages},
    ports::{MessageSession, SessionError, SessionSource},
    validation::{ValidationConfig, ValidationError, validate_with},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for message store operations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// The message failed validation and was not persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A message with the same identifier already exists.
    #[error("message {0} already exists")]
    Conflict(MessageId),

    /// No message has the requested identifier.
    #[error("message {0} was not found")]
    NotFound(MessageId),

    /// The backing session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Message collection store bound to one persistence session.
///
/// The store owns its session; dropping the store releases the session and
/// discards any change that was staged but not committed.
#[derive(Debug)]
pub struct MessageStore<S>
where
    S: MessageSession,
{
    session: S,
    config: ValidationConfig,
}

impl<S> MessageStore<S>
where
    S: MessageSession,
{
    /// Creates a store over `session` with the default validation config.
    #[must_use]
    pub fn new(session: S) -> Self {
        Self::with_config(session, ValidationConfig::default())
    }

    /// Creates a store over `session` with an explicit validation config.
    #[must_use]
    pub const fn with_config(session: S, config: ValidationConfig) -> Self {
        Self { session, config }
    }

    /// Opens a fresh session from `source` and binds a store to it.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when the source cannot provide
    /// a session.
    pub async fn open<Src>(source: &Src, config: ValidationConfig) -> MessageStoreResult<Self>
    where
        Src: SessionSource<Session = S>,
    {
        let session = source.open_session().await?;
        Ok(Self::with_config(session, config))
    }

    /// Returns the validation config applied by [`Self::add_message`].
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Releases the store, returning the bound session.
    #[must_use]
    pub fn into_session(self) -> S {
        self.session
    }

    /// Returns every stored message.
    ///
    /// No ordering is guaranteed; callers sort when they compare.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when the listing fails.
    pub async fn get_all_messages(&mut self) -> MessageStoreResult<Vec<Message>> {
        let messages = self.session.list().await?;
        debug!(count = messages.len(), "listed messages");
        Ok(messages)
    }

    /// Finds a message by identifier.
    ///
    /// Returns `Ok(None)` when no message has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when the lookup fails.
    pub async fn find_message(&mut self, id: MessageId) -> MessageStoreResult<Option<Message>> {
        Ok(self.session.find_by_id(id).await?)
    }

    /// Validates and stores a new message.
    ///
    /// The session is not touched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Validation`] when the message breaks a
    /// validation rule, [`MessageStoreError::Conflict`] when its identifier is
    /// already taken, or [`MessageStoreError::Session`] when persistence
    /// fails.
    pub async fn add_message(&mut self, message: Message) -> MessageStoreResult<()> {
        let id = message.id();
        if let Some(err) = ValidationError::from_violations(validate_with(&message, &self.config))
        {
            warn!(message_id = %id, error = %err, "rejected invalid message");
            return Err(err.into());
        }

        if self.session.find_by_id(id).await?.is_some() {
            warn!(message_id = %id, "rejected duplicate message");
            return Err(MessageStoreError::Conflict(id));
        }

        let staged = self.session.add(message).await.map_err(MessageStoreError::from);
        self.discard_on_err(staged)?;
        self.session.commit().await?;
        debug!(message_id = %id, "added message");
        Ok(())
    }

    /// Deletes the message with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::NotFound`] when no message has the given
    /// identifier, or [`MessageStoreError::Session`] when persistence fails.
    pub async fn delete_message(&mut self, id: MessageId) -> MessageStoreResult<()> {
        if self.session.find_by_id(id).await?.is_none() {
            warn!(message_id = %id, "delete target not found");
            return Err(MessageStoreError::NotFound(id));
        }

        let staged = self.session.remove(id).await.map_err(MessageStoreError::from);
        self.discard_on_err(staged)?;
        self.session.commit().await?;
        debug!(message_id = %id, "deleted message");
        Ok(())
    }

    /// Deletes every stored message.
    ///
    /// Succeeds on an already empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when persistence fails.
    pub async fn delete_all_messages(&mut self) -> MessageStoreResult<()> {
        let staged = self.stage_remove_all().await;
        let removed = self.discard_on_err(staged)?;
        self.session.commit().await?;
        debug!(count = removed, "deleted all messages");
        Ok(())
    }

    /// Returns the fixed seed messages used by fixtures.
    ///
    /// Does not touch any store.
    #[must_use]
    pub fn get_seed_messages() -> Vec<Message> {
        seed_messages()
    }

    /// Inserts the seed messages in a single commit.
    ///
    /// Unlike [`Self::add_message`], seeding does not look up each
    /// identifier first. The inserts are staged together and the backing
    /// store rejects the whole commit if any seed identifier already exists,
    /// so a clash surfaces as [`SessionError::DuplicateKey`] inside
    /// [`MessageStoreError::Session`] rather than as
    /// [`MessageStoreError::Conflict`], and no seed message is applied.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when persistence fails,
    /// including when a seed identifier is already present.
    pub async fn seed(&mut self) -> MessageStoreResult<()> {
        let staged = self.stage_seed().await;
        let count = self.discard_on_err(staged)?;
        self.session.commit().await?;
        debug!(count, "seeded messages");
        Ok(())
    }

    /// Replaces the whole collection with the seed messages in a single
    /// commit.
    ///
    /// If staging fails part way, the partial change set is discarded and
    /// the collection is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Session`] when persistence fails.
    pub async fn reset_to_seed(&mut self) -> MessageStoreResult<()> {
        let staged = self.stage_remove_all().await;
        let removed = self.discard_on_err(staged)?;
        let staged = self.stage_seed().await;
        let seeded = self.discard_on_err(staged)?;
        self.session.commit().await?;
        debug!(removed, seeded, "reset messages to seed data");
        Ok(())
    }

    /// Drops everything staged so far when a staging step failed, so a later
    /// commit on the same session cannot apply a half-built change set.
    fn discard_on_err<T>(&mut self, staged: MessageStoreResult<T>) -> MessageStoreResult<T> {
        if let Err(err) = &staged {
            warn!(error = %err, "discarding partially staged changes");
            self.session.discard();
        }
        staged
    }

    async fn stage_remove_all(&mut self) -> MessageStoreResult<usize> {
        let existing = self.session.list().await?;
        let count = existing.len();
        for message in existing {
            self.session.remove(message.id()).await?;
        }
        Ok(count)
    }

    async fn stage_seed(&mut self) -> MessageStoreResult<usize> {
        let seeds = seed_messages();
        let count = seeds.len();
        for message in seeds {
            self.session.add(message).await?;
        }
        Ok(count)
    }
}
