use crate::{
    error::{TodoError, Result},
    session::{Session, SessionId},
    storage::SessionStorage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage keeping one JSON document per session
pub struct FileSessionStorage {
    root_path: PathBuf,
}

impl FileSessionStorage {
    const TODOS_DIR: &'static str = ".todos";
    const SESSIONS_DIR: &'static str = "sessions";
    const EXTENSION: &'static str = "json";

    /// Creates a new FileSessionStorage under the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::TODOS_DIR),
        }
    }

    fn sessions_dir(&self) -> PathBuf {
        self.root_path.join(Self::SESSIONS_DIR)
    }

    fn session_file(&self, id: &SessionId) -> PathBuf {
        self.sessions_dir().join(format!("{}.{}", id.as_str(), Self::EXTENSION))
    }

    /// Recovers the session id from a file name written by `session_file`
    fn session_id_from_path(path: &Path) -> Option<SessionId> {
        if path.extension()? != Self::EXTENSION {
            return None;
        }
        path.file_stem()?.to_str()?.parse().ok()
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.sessions_dir()).await?;

        let gitignore_path = self.root_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path, "# Session state\nsessions/\n").await?;
        }

        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<Session> {
        let file_path = self.session_file(id);

        if !file_path.exists() {
            return Ok(Session::default());
        }

        let contents = fs::read_to_string(&file_path).await?;
        let session: Session = serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(session = %id, error = %e, "unreadable session file");
            e
        })?;

        Ok(session)
    }

    async fn save(&self, id: &SessionId, session: &Session) -> Result<()> {
        fs::create_dir_all(self.sessions_dir()).await?;

        let json = serde_json::to_string_pretty(session)?;
        fs::write(self.session_file(id), json).await?;

        tracing::debug!(session = %id, lists = session.store.lists.len(), "session saved");
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        let file_path = self.session_file(id);

        if !file_path.exists() {
            return Err(TodoError::SessionNotFound(id.to_string()));
        }

        fs::remove_file(file_path).await?;
        tracing::info!(session = %id, "session deleted");
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<SessionId>> {
        let mut entries = match fs::read_dir(self.sessions_dir()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            ids.extend(Self::session_id_from_path(&entry.path()));
        }

        ids.sort();
        Ok(ids)
    }

    async fn is_initialized(&self) -> bool {
        self.sessions_dir().exists()
    }
}
