use crate::{
    error::{Result, TodoError},
    storage::{MemorySessionStorage, SessionStorage},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ROOT_ENV: &str = "TODOS_SESSIONS_ROOT";
const STORAGE_ENV: &str = "TODOS_STORAGE";

/// Where session state is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    File,
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            _ => Err(TodoError::ConfigError(format!(
                "Invalid storage '{}'. Valid values: file, memory",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_root")]
    pub sessions_root: PathBuf,
    #[serde(default = "default_storage")]
    pub storage: StorageKind,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_storage() -> StorageKind {
    if cfg!(feature = "file-storage") {
        StorageKind::File
    } else {
        StorageKind::Memory
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions_root: default_root(),
            storage: default_storage(),
        }
    }
}

impl Config {
    /// Reads a JSON config file, falling back to defaults when it is absent,
    /// then applies environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str::<Config>(&contents)?
        } else {
            Config::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ROOT_ENV).filter(|v| !v.trim().is_empty()) {
            self.sessions_root = PathBuf::from(root.trim());
        }
        if let Some(kind) = lookup(STORAGE_ENV) {
            self.storage = kind.parse()?;
        }
        Ok(())
    }

    pub fn build_storage(&self) -> Result<Box<dyn SessionStorage>> {
        tracing::info!(storage = ?self.storage, root = %self.sessions_root.display(), "session storage configured");
        match self.storage {
            #[cfg(feature = "file-storage")]
            StorageKind::File => Ok(Box::new(crate::storage::FileSessionStorage::new(
                &self.sessions_root,
            ))),
            #[cfg(not(feature = "file-storage"))]
            StorageKind::File => Err(TodoError::ConfigError(
                "file storage is not enabled in this build".to_string(),
            )),
            StorageKind::Memory => Ok(Box::new(MemorySessionStorage::new())),
        }
    }
}
