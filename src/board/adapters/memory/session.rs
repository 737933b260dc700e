//! In-memory message database and its sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::board::{
    adapters::PendingChange,
    domain::{Message, MessageId},
    ports::{MessageSession, SessionError, SessionResult, SessionSource},
};

type MessageTable = HashMap<MessageId, Message>;

/// Thread-safe in-memory message database.
///
/// Clones share the same committed state, so every session opened from any
/// clone observes the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageDatabase {
    state: Arc<RwLock<MessageTable>>,
}

impl InMemoryMessageDatabase {
    /// Creates an empty in-memory database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session over this database.
    #[must_use]
    pub fn session(&self) -> InMemorySession {
        InMemorySession {
            state: Arc::clone(&self.state),
            pending: Vec::new(),
        }
    }
}

#[async_trait]
impl SessionSource for InMemoryMessageDatabase {
    type Session = InMemorySession;

    async fn open_session(&self) -> SessionResult<Self::Session> {
        Ok(self.session())
    }
}

/// Session over an [`InMemoryMessageDatabase`].
#[derive(Debug)]
pub struct InMemorySession {
    state: Arc<RwLock<MessageTable>>,
    pending: Vec<PendingChange>,
}

impl InMemorySession {
    /// Returns the number of changes staged since the last commit.
    #[must_use]
    pub const fn pending_changes(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl MessageSession for InMemorySession {
    async fn add(&mut self, message: Message) -> SessionResult<()> {
        self.pending.push(PendingChange::Insert(message));
        Ok(())
    }

    async fn find_by_id(&mut self, id: MessageId) -> SessionResult<Option<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| SessionError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    async fn remove(&mut self, id: MessageId) -> SessionResult<()> {
        self.pending.push(PendingChange::Remove(id));
        Ok(())
    }

    async fn list(&mut self) -> SessionResult<Vec<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| SessionError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.values().cloned().collect())
    }

    fn discard(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        debug!(changes = dropped, "discarded staged in-memory changes");
    }

    async fn commit(&mut self) -> SessionResult<()> {
        let changes = std::mem::take(&mut self.pending);
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionError::persistence(std::io::Error::other(err.to_string())))?;

        let mut staged = state.clone();
        for change in &changes {
            apply_change(&mut staged, change)?;
        }
        *state = staged;

        debug!(changes = changes.len(), "committed in-memory session");
        Ok(())
    }
}

fn apply_change(table: &mut MessageTable, change: &PendingChange) -> SessionResult<()> {
    match change {
        PendingChange::Insert(message) => {
            if table.contains_key(&message.id()) {
                return Err(SessionError::DuplicateKey(message.id()));
            }
            table.insert(message.id(), message.clone());
        }
        PendingChange::Remove(id) => {
            if table.remove(id).is_none() {
                return Err(SessionError::MissingKey(*id));
            }
        }
    }
    Ok(())
}
