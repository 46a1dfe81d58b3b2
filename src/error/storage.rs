//! Local persistence error types.

use thiserror::Error;

/// Errors from the durable credential store and other local state files.
///
/// Storage failures are never retried; callers fall back to the
/// logged-out state or surface the message.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("failed to read stored session: {0}")]
    LoadFailed(String),

    #[error("failed to write stored session: {0}")]
    SaveFailed(String),

    #[error("failed to clear stored session: {0}")]
    ClearFailed(String),

    #[error("stored session is corrupt: {0}")]
    Serialization(String),

    /// The home directory could not be determined, so there is nowhere
    /// to put the session file.
    #[error("no home directory available")]
    NoHomeDirectory,
}

impl StorageError {
    pub fn user_message(&self) -> String {
        match self {
            StorageError::LoadFailed(_) | StorageError::Serialization(_) => {
                "Could not read your saved session. Please sign in again.".to_string()
            }
            StorageError::SaveFailed(_) => {
                "Could not save your session. Check storage permissions.".to_string()
            }
            StorageError::ClearFailed(_) => "Could not remove your saved session.".to_string(),
            StorageError::NoHomeDirectory => {
                "No writable home directory was found for session storage.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::LoadFailed(_) => "E_STORE_LOAD",
            StorageError::SaveFailed(_) => "E_STORE_SAVE",
            StorageError::ClearFailed(_) => "E_STORE_CLEAR",
            StorageError::Serialization(_) => "E_STORE_SERDE",
            StorageError::NoHomeDirectory => "E_STORE_NO_HOME",
        }
    }
}
