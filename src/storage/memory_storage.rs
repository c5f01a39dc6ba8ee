use crate::{
    error::{Result, TodoError},
    session::{Session, SessionId},
    storage::SessionStorage,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process storage; state is lost when the process exits
#[derive(Default)]
pub struct MemorySessionStorage {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<Session> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned().unwrap_or_default())
    }

    async fn save(&self, id: &SessionId, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.insert(id.clone(), session.clone()).is_none() {
            tracing::info!(session = %id, "session created");
        }
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TodoError::SessionNotFound(id.to_string()))
    }

    async fn list_ids(&self) -> Result<Vec<SessionId>> {
        let sessions = self.sessions.read().await;
        let mut ids: Vec<SessionId> = sessions.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}
