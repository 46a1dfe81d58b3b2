//! In-memory credential store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::Session;
use crate::error::StorageError;
use crate::traits::CredentialStore;

/// Credential store holding the session in memory, with per-operation
/// failure injection. Clones share state.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialStore {
    session: Arc<Mutex<Option<Session>>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            load_should_fail: Arc::new(Mutex::new(false)),
            save_should_fail: Arc::new(Mutex::new(false)),
            clear_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store already holding a session.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        *store.session.lock().unwrap() = Some(session);
        store
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Current session, read synchronously for assertions.
    pub fn current_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Replace the session synchronously.
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(StorageError::LoadFailed("mock load failure".to_string()));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::SaveFailed("mock save failure".to_string()));
        }
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(StorageError::ClearFailed("mock clear failure".to_string()));
        }
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
