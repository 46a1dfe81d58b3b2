//! Device push registration handshake.
//!
//! A linear sequence of gates, each terminal on failure, run once after
//! a successful sign-in: device capability, notification permission,
//! provider token fetch, backend registration. Nothing here retries and
//! nothing here blocks the sign-in that triggered it; the caller spawns
//! the flow and moves on.

pub mod marker;

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config::PushConfig;
use crate::traits::PushPlatform;

pub use marker::{AttemptMarker, FileAttemptMarker, InMemoryAttemptMarker};

/// Terminal state of one registration run.
///
/// An explicit result type rather than side-effected prompts, so
/// callers and tests can assert on how the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The device token reached the backend.
    Registered,
    /// Not a physical device; no registration is possible here.
    UnsupportedDevice,
    /// The user declined notification permission.
    PermissionDenied,
    /// The provider could not produce a token (missing project id or
    /// provider failure). No fallback.
    ProviderError(String),
    /// The backend rejected or never received the token. Logged only;
    /// registration is best-effort.
    RegistrationFailed(String),
}

impl RegistrationOutcome {
    /// Message to show the user, when this outcome is user-visible at
    /// all. Backend registration failures are deliberately silent.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            RegistrationOutcome::Registered => None,
            RegistrationOutcome::UnsupportedDevice => Some(
                "Push notifications only work on a physical device, not in a simulator."
                    .to_string(),
            ),
            RegistrationOutcome::PermissionDenied => Some(
                "Enable notification permissions to receive push notifications.".to_string(),
            ),
            RegistrationOutcome::ProviderError(msg) => {
                Some(format!("Could not obtain a push token: {msg}"))
            }
            RegistrationOutcome::RegistrationFailed(_) => None,
        }
    }
}

/// Runs the registration handshake.
pub struct PushRegistrar {
    platform: Arc<dyn PushPlatform>,
    api: Arc<ApiClient>,
    marker: Arc<dyn AttemptMarker>,
    config: PushConfig,
}

impl PushRegistrar {
    pub fn new(
        platform: Arc<dyn PushPlatform>,
        api: Arc<ApiClient>,
        marker: Arc<dyn AttemptMarker>,
        config: PushConfig,
    ) -> Self {
        Self {
            platform,
            api,
            marker,
            config,
        }
    }

    /// Run the gates in order. Every failure is terminal; there are no
    /// retries anywhere in the sequence.
    pub async fn register(&self) -> RegistrationOutcome {
        if !self.platform.is_physical_device() {
            info!("push registration skipped: not a physical device");
            return RegistrationOutcome::UnsupportedDevice;
        }

        let mut permission = self.platform.permission_status().await;
        if !permission.is_granted() {
            permission = self.platform.request_permission().await;
        }
        if !permission.is_granted() {
            info!("push registration stopped: permission denied");
            return RegistrationOutcome::PermissionDenied;
        }

        let project_id = match &self.config.project_id {
            Some(id) => id.clone(),
            None => {
                warn!("push registration stopped: no push project id configured");
                return RegistrationOutcome::ProviderError(
                    "push project id is not configured".to_string(),
                );
            }
        };

        let device_token = match self.platform.device_token(&project_id).await {
            Ok(token) => token,
            Err(err) => {
                warn!("push token fetch failed: {err}");
                return RegistrationOutcome::ProviderError(err.to_string());
            }
        };

        match self.api.register_push_token(&device_token).await {
            Ok(()) => {
                if let Err(err) = self.marker.record() {
                    warn!(code = err.error_code(), "could not record push marker: {err}");
                }
                info!("push token registered with backend");
                RegistrationOutcome::Registered
            }
            Err(err) => {
                // Best-effort: logged, never surfaced, never retried.
                warn!(code = err.error_code(), "push token registration failed: {err}");
                RegistrationOutcome::RegistrationFailed(err.to_string())
            }
        }
    }

    /// Run the handshake on its own task so the sign-in that triggered
    /// it can proceed immediately.
    pub fn spawn(self: Arc<Self>) -> tokio::task::JoinHandle<RegistrationOutcome> {
        tokio::spawn(async move { self.register().await })
    }
}
