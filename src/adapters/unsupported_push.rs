//! Push platform adapter for environments without push capability.
//!
//! Desktop and simulator builds have no real push service. This adapter
//! reports exactly that, so the registration flow terminates at its
//! first gate with the informational unsupported-device result.

use async_trait::async_trait;

use crate::traits::{PermissionStatus, PushPlatform, PushProviderError};

/// A [`PushPlatform`] that never has push capability.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedPushPlatform;

impl UnsupportedPushPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushPlatform for UnsupportedPushPlatform {
    fn is_physical_device(&self) -> bool {
        false
    }

    async fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::Undetermined
    }

    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn device_token(&self, _project_id: &str) -> Result<String, PushProviderError> {
        Err(PushProviderError::Provider(
            "push is not available on this platform".to_string(),
        ))
    }
}
