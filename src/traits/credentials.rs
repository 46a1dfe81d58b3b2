//! Credential store trait abstraction.
//!
//! The session pair is owned by whichever implementation of this trait
//! the app is wired with; every other component only reads through it.

use async_trait::async_trait;

use crate::auth::Session;
use crate::error::StorageError;

/// Trait for durable session storage.
///
/// The contract is all-or-nothing: `load` yields either a complete
/// [`Session`] (token and profile) or none, never a partial pair.
/// Implementations include the production file-backed store and the
/// in-memory store used in tests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when no session is stored.
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist the session pair atomically.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove the stored pair.
    async fn clear(&self) -> Result<(), StorageError>;
}
