//! Best-effort record of a completed push registration.
//!
//! The marker is advisory: writes that fail are logged and forgotten,
//! and nothing in the registration flow reads it back before running.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// The marker file name, inside the same directory as the session file.
const MARKER_FILE: &str = ".push_registered.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkerRecord {
    registered_at: i64,
}

/// Durable marker of a push registration attempt.
pub trait AttemptMarker: Send + Sync {
    /// Record that registration went through.
    fn record(&self) -> Result<(), StorageError>;

    /// Whether a registration was ever recorded on this install.
    fn is_recorded(&self) -> bool;
}

/// File-backed marker under `~/.repvision/`.
#[derive(Debug)]
pub struct FileAttemptMarker {
    path: PathBuf,
}

impl FileAttemptMarker {
    pub fn new() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::NoHomeDirectory)?;
        Ok(Self {
            path: home.join(".repvision").join(MARKER_FILE),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AttemptMarker for FileAttemptMarker {
    fn record(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::SaveFailed(e.to_string()))?;
            }
        }

        let record = MarkerRecord {
            registered_at: Utc::now().timestamp(),
        };
        let body = serde_json::to_vec_pretty(&record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, body).map_err(|e| StorageError::SaveFailed(e.to_string()))
    }

    fn is_recorded(&self) -> bool {
        self.path.exists()
    }
}

/// In-memory marker for tests, with optional write failure.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttemptMarker {
    recorded: Arc<Mutex<bool>>,
    record_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryAttemptMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_record_should_fail(&self, should_fail: bool) {
        *self.record_should_fail.lock().unwrap() = should_fail;
    }
}

impl AttemptMarker for InMemoryAttemptMarker {
    fn record(&self) -> Result<(), StorageError> {
        if *self.record_should_fail.lock().unwrap() {
            return Err(StorageError::SaveFailed("mock marker failure".to_string()));
        }
        *self.recorded.lock().unwrap() = true;
        Ok(())
    }

    fn is_recorded(&self) -> bool {
        *self.recorded.lock().unwrap()
    }
}
