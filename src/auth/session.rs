//! Session storage for the RepVision client.
//!
//! The authenticated identity is a token plus the signed-in user's
//! profile, persisted together in `~/.repvision/.session.json`. The two
//! are one document on disk, so a reader sees a complete pair or
//! nothing.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::StorageError;

/// The local state directory name.
const SESSION_DIR: &str = ".repvision";

/// The session file name.
const SESSION_FILE: &str = ".session.json";

/// Profile of the signed-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
}

/// The authenticated identity pair.
///
/// Created on successful login, loaded at app start, destroyed on
/// logout. Token and profile are never present individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token for API authentication.
    pub token: String,
    /// The signed-in user's profile.
    pub profile: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }
}

/// Manages the durable session file.
#[derive(Debug)]
pub struct SessionFile {
    session_path: PathBuf,
}

impl SessionFile {
    /// Create a manager rooted in the user's home directory.
    pub fn new() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::NoHomeDirectory)?;
        Ok(Self {
            session_path: home.join(SESSION_DIR).join(SESSION_FILE),
        })
    }

    /// Create a manager with an explicit file path.
    pub fn with_path(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    /// Path of the session file.
    pub fn session_path(&self) -> &PathBuf {
        &self.session_path
    }

    /// Load the stored session, or `None` when no file exists.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.session_path)
            .map_err(|e| StorageError::LoadFailed(e.to_string()))?;
        let reader = BufReader::new(file);
        let session = serde_json::from_reader(reader)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(session))
    }

    /// Persist the pair, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
            }
        }

        let file = File::create(&self.session_path)
            .map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StorageError::SaveFailed(e.to_string()))
    }

    /// Remove the stored pair. Succeeds when no file exists.
    pub fn clear(&self) -> Result<(), StorageError> {
        if !self.session_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.session_path).map_err(|e| StorageError::ClearFailed(e.to_string()))
    }
}
