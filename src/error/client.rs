//! Unified client error type.
//!
//! `ClientError` consolidates the domain errors so flows that cross
//! layers (sign-in touches the network and the store) can return one
//! type, while call sites keep access to category and user message.

use thiserror::Error;

use super::api::ApiError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::storage::StorageError;
use super::upload::UploadError;

/// Any error the client core can produce.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for flows returning the unified error.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Api(ApiError::AuthMissing) => ErrorCategory::Auth,
            ClientError::Api(ApiError::Server { .. }) | ClientError::Api(ApiError::Decode(_)) => {
                ErrorCategory::Server
            }
            ClientError::Api(_) => ErrorCategory::Network,
            ClientError::Storage(_) => ErrorCategory::Storage,
            ClientError::Upload(_) => ErrorCategory::Upload,
            ClientError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether the user must be sent back to the login screen.
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Api(ApiError::AuthMissing))
    }

    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(e) => e.user_message(),
            ClientError::Storage(e) => e.user_message(),
            ClientError::Upload(e) => e.user_message(),
            ClientError::Config(e) => e.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Api(e) => e.error_code(),
            ClientError::Storage(e) => e.error_code(),
            ClientError::Upload(e) => e.error_code(),
            ClientError::Config(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_route_to_handling_strategy() {
        let auth: ClientError = ApiError::AuthMissing.into();
        assert_eq!(auth.category(), ErrorCategory::Auth);
        assert!(auth.requires_login());

        let net: ClientError = ApiError::ConnectionFailed("refused".into()).into();
        assert_eq!(net.category(), ErrorCategory::Network);
        assert!(!net.requires_login());

        let server: ClientError = ApiError::Server {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);

        let storage: ClientError = StorageError::SaveFailed("disk full".into()).into();
        assert_eq!(storage.category(), ErrorCategory::Storage);
    }

    #[test]
    fn user_message_passes_through() {
        let err: ClientError = UploadError::Provider("bad preset".into()).into();
        assert!(err.user_message().contains("bad preset"));
    }

    #[test]
    fn transparent_display() {
        let err: ClientError = ApiError::AuthMissing.into();
        assert_eq!(err.to_string(), "authentication token not found");
    }
}
