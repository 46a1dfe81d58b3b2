//! Push platform trait abstraction.
//!
//! The registration handshake needs three platform facts: whether this
//! is a real device, whether notifications are permitted, and the
//! device's push identifier. All three come through this trait so the
//! flow can run against a mock in tests and a no-op on desktop builds.

use async_trait::async_trait;
use thiserror::Error;

/// Notification permission state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not been asked yet.
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Errors from the platform's push token provider.
#[derive(Debug, Clone, Error)]
pub enum PushProviderError {
    #[error("push provider rejected the request: {0}")]
    Provider(String),

    #[error("push token request failed: {0}")]
    Transport(String),
}

/// Trait for the platform push capability.
#[async_trait]
pub trait PushPlatform: Send + Sync {
    /// Whether the code runs on hardware that can receive push
    /// notifications (false on simulators and desktop builds).
    fn is_physical_device(&self) -> bool;

    /// Current notification permission without prompting.
    async fn permission_status(&self) -> PermissionStatus;

    /// Prompt the user and return the resulting permission.
    async fn request_permission(&self) -> PermissionStatus;

    /// Fetch the device push identifier for the given provider project.
    async fn device_token(&self, project_id: &str) -> Result<String, PushProviderError>;
}
