//! Sign-in, sign-up, sign-out, and session restore.
//!
//! The flow is the only writer of the stored session: it saves the pair
//! on a successful login and clears it on logout. Right after a save it
//! fires the push registration handshake on its own task; the sign-in
//! caller never waits on that.

use std::sync::Arc;

use tracing::info;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{LoginRequest, RegisterRequest};
use crate::push::PushRegistrar;
use crate::traits::CredentialStore;

use super::session::{Session, UserProfile};

/// User-serialized authentication actions.
pub struct AuthFlow {
    api: Arc<ApiClient>,
    store: Arc<dyn CredentialStore>,
    registrar: Option<Arc<PushRegistrar>>,
}

impl AuthFlow {
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            api,
            store,
            registrar: None,
        }
    }

    /// Attach the push registrar fired after successful sign-ins.
    pub fn with_push_registrar(mut self, registrar: Arc<PushRegistrar>) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// A non-2xx login reply surfaces the server's error text. A failed
    /// session save propagates as a storage error; the caller falls
    /// back to the logged-out state.
    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let reply = self
            .api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let session = Session::new(
            reply.token,
            UserProfile {
                full_name: reply.full_name,
                email: reply.email,
            },
        );
        self.store.save(&session).await?;
        info!("signed in, session saved");

        if let Some(registrar) = &self.registrar {
            // Fire-and-forget; the outcome is logged by the flow itself.
            Arc::clone(registrar).spawn();
        }

        Ok(session)
    }

    /// Create an account. The caller signs in separately afterwards.
    pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> ClientResult<()> {
        self.api
            .register(&RegisterRequest {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Load the stored session at app start. `None` sends the user to
    /// the login screen.
    pub async fn restore(&self) -> ClientResult<Option<Session>> {
        Ok(self.store.load().await?)
    }

    /// Clear the stored pair.
    pub async fn sign_out(&self) -> ClientResult<()> {
        self.store.clear().await?;
        info!("signed out, session cleared");
        Ok(())
    }
}
