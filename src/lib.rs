//! # Todolist Core
//!
//! State management for session-backed todo lists.
//!
//! Each user session owns a [`Store`] of named lists, and each list holds
//! an ordered set of todos. This crate provides the operations on that
//! state, the typed request boundary a web layer calls into, and pluggable
//! storage for keeping sessions between requests. Routing, templating and
//! cookie handling are left to the host application.

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::{Config, StorageKind};
pub use domain::{
    list::{List, ListId},
    store::{is_list_complete, Store},
    todo::{Todo, TodoId},
};
pub use error::{ErrorKind, Result, TodoError};
pub use session::{Command, Flash, FlashKind, Response, Session, SessionId};
pub use storage::SessionStorage;
