//! File-backed credential store adapter.
//!
//! Wraps [`SessionFile`] so the durable session pair satisfies the
//! [`CredentialStore`] trait the rest of the client is wired against.

use async_trait::async_trait;

use crate::auth::{Session, SessionFile};
use crate::error::StorageError;
use crate::traits::CredentialStore;

/// Credential store persisting to `~/.repvision/.session.json`.
#[derive(Debug)]
pub struct FileCredentialStore {
    file: SessionFile,
}

impl FileCredentialStore {
    /// Create a store rooted in the user's home directory.
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self {
            file: SessionFile::new()?,
        })
    }

    /// Create a store over an explicit file path (tests, portable
    /// installs).
    pub fn with_path(path: std::path::PathBuf) -> Self {
        Self {
            file: SessionFile::with_path(path),
        }
    }

    /// Path of the backing file.
    pub fn session_path(&self) -> &std::path::PathBuf {
        self.file.session_path()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        self.file.load()
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.file.save(session)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.file.clear()
    }
}
