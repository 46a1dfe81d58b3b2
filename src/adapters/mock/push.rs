//! Mock push platform for testing the registration handshake.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{PermissionStatus, PushPlatform, PushProviderError};

/// Configurable [`PushPlatform`] double.
///
/// Records which gates were actually exercised, so tests can assert
/// that an early termination never queried later gates.
#[derive(Debug, Clone)]
pub struct MockPushPlatform {
    is_device: Arc<Mutex<bool>>,
    existing_permission: Arc<Mutex<PermissionStatus>>,
    prompt_result: Arc<Mutex<PermissionStatus>>,
    token_result: Arc<Mutex<Result<String, PushProviderError>>>,
    permission_checks: Arc<Mutex<u32>>,
    prompts_shown: Arc<Mutex<u32>>,
    token_requests: Arc<Mutex<Vec<String>>>,
}

impl MockPushPlatform {
    /// A physical device with permission already granted and a token
    /// ready — the all-gates-pass configuration.
    pub fn granted_device(token: &str) -> Self {
        Self {
            is_device: Arc::new(Mutex::new(true)),
            existing_permission: Arc::new(Mutex::new(PermissionStatus::Granted)),
            prompt_result: Arc::new(Mutex::new(PermissionStatus::Granted)),
            token_result: Arc::new(Mutex::new(Ok(token.to_string()))),
            permission_checks: Arc::new(Mutex::new(0)),
            prompts_shown: Arc::new(Mutex::new(0)),
            token_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A simulator: not a physical device.
    pub fn simulator() -> Self {
        let platform = Self::granted_device("unused");
        platform.set_is_device(false);
        platform
    }

    pub fn set_is_device(&self, is_device: bool) {
        *self.is_device.lock().unwrap() = is_device;
    }

    pub fn set_existing_permission(&self, status: PermissionStatus) {
        *self.existing_permission.lock().unwrap() = status;
    }

    pub fn set_prompt_result(&self, status: PermissionStatus) {
        *self.prompt_result.lock().unwrap() = status;
    }

    pub fn set_token_result(&self, result: Result<String, PushProviderError>) {
        *self.token_result.lock().unwrap() = result;
    }

    /// How many times the existing permission was queried.
    pub fn permission_checks(&self) -> u32 {
        *self.permission_checks.lock().unwrap()
    }

    /// How many times the user was prompted.
    pub fn prompts_shown(&self) -> u32 {
        *self.prompts_shown.lock().unwrap()
    }

    /// Project ids passed to token fetches.
    pub fn token_requests(&self) -> Vec<String> {
        self.token_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushPlatform for MockPushPlatform {
    fn is_physical_device(&self) -> bool {
        *self.is_device.lock().unwrap()
    }

    async fn permission_status(&self) -> PermissionStatus {
        *self.permission_checks.lock().unwrap() += 1;
        *self.existing_permission.lock().unwrap()
    }

    async fn request_permission(&self) -> PermissionStatus {
        *self.prompts_shown.lock().unwrap() += 1;
        *self.prompt_result.lock().unwrap()
    }

    async fn device_token(&self, project_id: &str) -> Result<String, PushProviderError> {
        self.token_requests
            .lock()
            .unwrap()
            .push(project_id.to_string());
        self.token_result.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn granted_device_passes_all_gates() {
        let platform = MockPushPlatform::granted_device("ExponentPushToken[abc]");
        assert!(platform.is_physical_device());
        assert!(platform.permission_status().await.is_granted());
        assert_eq!(
            platform.device_token("proj").await.unwrap(),
            "ExponentPushToken[abc]"
        );
        assert_eq!(platform.token_requests(), vec!["proj".to_string()]);
    }

    #[tokio::test]
    async fn simulator_is_not_a_device() {
        let platform = MockPushPlatform::simulator();
        assert!(!platform.is_physical_device());
    }

    #[tokio::test]
    async fn prompt_counting() {
        let platform = MockPushPlatform::granted_device("t");
        platform.set_existing_permission(PermissionStatus::Undetermined);
        platform.set_prompt_result(PermissionStatus::Denied);

        assert_eq!(platform.request_permission().await, PermissionStatus::Denied);
        assert_eq!(platform.prompts_shown(), 1);
    }
}
