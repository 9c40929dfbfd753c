//! # Session Store
//!
//! A key-value store scoped to one shopping session. The cart engine keeps its durable
//! snapshot here so that a reload within the same session finds the same cart.
//!
//! Two backends are provided:
//!
//! - [`InMemorySessionStore`] - lives as long as the process; used by tests and by
//!   the demo when no session directory is configured.
//! - [`FileSessionStore`] - one file per key in a session directory, so separate runs
//!   of the demo binary can share a session.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;

use thiserror::Error;

/// Errors raised by a Session Store backend.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The backend cannot be used right now (e.g. a poisoned lock).
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session key: {0:?}")]
    InvalidKey(String),
}

/// Key-value storage for serialized session data.
///
/// Implementations must be safe to share across tasks. Deleting a key that is not
/// present is not an error.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    fn delete(&self, key: &str) -> Result<(), SessionStoreError>;
}
