//! Third-party media upload error types.

use thiserror::Error;

/// Errors from the external object-storage upload step.
///
/// The upload happens before the backend ever sees the video, so these
/// never carry an authenticated-request failure.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// Cloud name or upload preset is not configured.
    #[error("media upload is not configured: {0}")]
    MissingConfig(String),

    /// Could not reach the upload endpoint.
    #[error("upload connection failed: {0}")]
    Network(String),

    /// The provider rejected the upload.
    #[error("upload rejected by provider: {0}")]
    Provider(String),

    /// The provider's reply had no usable secure URL.
    #[error("unexpected provider response: {0}")]
    Decode(String),
}

impl UploadError {
    pub fn user_message(&self) -> String {
        match self {
            UploadError::MissingConfig(_) => {
                "Video upload is not configured on this build.".to_string()
            }
            UploadError::Network(_) => "Could not reach the upload service.".to_string(),
            UploadError::Provider(msg) => format!("The upload service rejected the video: {msg}"),
            UploadError::Decode(_) => "The upload service sent an unexpected reply.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UploadError::MissingConfig(_) => "E_UPLOAD_CONFIG",
            UploadError::Network(_) => "E_UPLOAD_NET",
            UploadError::Provider(_) => "E_UPLOAD_PROVIDER",
            UploadError::Decode(_) => "E_UPLOAD_DECODE",
        }
    }
}
