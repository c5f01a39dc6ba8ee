use crate::{
    error::Result,
    session::{Session, SessionId},
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileSessionStorage;
pub use memory_storage::MemorySessionStorage;

/// Storage trait for keeping session state between requests
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Loads a session, or an empty one if nothing was saved for the id
    async fn load(&self, id: &SessionId) -> Result<Session>;

    /// Saves a session, replacing any previous state
    async fn save(&self, id: &SessionId, session: &Session) -> Result<()>;

    /// Deletes a session
    async fn delete(&self, id: &SessionId) -> Result<()>;

    /// Lists all stored session IDs
    async fn list_ids(&self) -> Result<Vec<SessionId>>;

    /// Checks if the storage is ready for use
    async fn is_initialized(&self) -> bool;
}
