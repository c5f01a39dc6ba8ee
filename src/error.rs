use crate::domain::{ListId, TodoId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

/// Broad classification used by the request layer to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidLength,
    DuplicateName,
    NotFound,
    Other,
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{subject} must be between {min} and {max} characters.")]
    InvalidLength {
        subject: &'static str,
        min: usize,
        max: usize,
    },

    #[error("List name must be unique.")]
    DuplicateName(String),

    #[error("The specified list was not found.")]
    ListNotFound(ListId),

    #[error("The specified todo was not found.")]
    TodoNotFound { list: ListId, todo: TodoId },

    #[error("No {0} ids left in this session")]
    IdsExhausted(&'static str),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid request parameter: {0}")]
    InvalidParam(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::ListNotFound(_) | Self::TodoNotFound { .. } | Self::InvalidId(_) => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::Other,
        }
    }

    /// Whether the error comes from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidLength | ErrorKind::DuplicateName
        )
    }
}
