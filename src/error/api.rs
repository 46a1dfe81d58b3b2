//! Request-layer error types.
//!
//! `ApiError` covers everything that can go wrong between the client and
//! the RepVision backend: the missing-session precondition, transport
//! failures, and non-2xx statuses surfaced by the typed endpoint wrappers.

use thiserror::Error;

/// Errors raised by the authenticated request executor and the typed
/// endpoint wrappers built on top of it.
///
/// The raw executor only produces `AuthMissing` and the transport
/// variants; `Server` and `Decode` come from the typed wrappers that
/// parse response bodies on behalf of the sync layer.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No stored session when an authenticated call was attempted.
    /// Raised before any network I/O happens.
    #[error("authentication token not found")]
    AuthMissing,

    /// Could not reach the backend at all.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The platform network stack gave up on the request.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The assembled request URL was rejected.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Backend answered with a non-2xx status. The body text is carried
    /// as the message so call sites can surface it inline.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// Transport error that fits no other variant.
    #[error("http error: {0}")]
    Other(String),
}

impl ApiError {
    /// Whether the only sensible handling is sending the user to the
    /// login screen.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::AuthMissing)
    }

    /// User-facing message for inline error states and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::AuthMissing => "You are signed out. Please sign in again.".to_string(),
            ApiError::ConnectionFailed(_) => {
                "Could not reach the server. Check the host and port settings.".to_string()
            }
            ApiError::Timeout(_) => "The server took too long to respond.".to_string(),
            ApiError::InvalidUrl(_) => "The server address is misconfigured.".to_string(),
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Server { status, .. } => format!("The server returned an error ({status})."),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Other(msg) => format!("Request failed: {msg}"),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::AuthMissing => "E_API_AUTH_MISSING",
            ApiError::ConnectionFailed(_) => "E_API_CONNECT",
            ApiError::Timeout(_) => "E_API_TIMEOUT",
            ApiError::InvalidUrl(_) => "E_API_URL",
            ApiError::Server { .. } => "E_API_SERVER",
            ApiError::Decode(_) => "E_API_DECODE",
            ApiError::Other(_) => "E_API_OTHER",
        }
    }
}
