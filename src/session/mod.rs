//! Session Store
//!
//! Holds the authenticated (token, user) pair and mirrors it to persistent
//! client storage so a restart restores the same session.
//!
//! ## Layout
//!
//! Two entries, written and cleared together:
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | opaque bearer token |
//! | `user` | JSON-encoded [`User`](crate::models::User) |
//!
//! ## Backends
//!
//! - [`MemoryStorage`]: process memory only (tests, throwaway sessions)
//! - [`FileStorage`]: JSON document on disk (terminal front end)
//! - `LocalStorage`: browser `localStorage`, lives in the web front end

mod migrate;
mod storage;
mod store;

pub use migrate::{decode_user, DecodedUser, RecordVersion};
pub use storage::{MemoryStorage, SessionStorage};
#[cfg(feature = "native")]
pub use storage::FileStorage;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};

use thiserror::Error;

/// Errors raised while reading or writing the persisted session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Backend refused or failed the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored user record is missing a required field
    #[error("Corrupt session record: {0}")]
    Corrupt(String),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
