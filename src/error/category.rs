//! High-level error classification.

use std::fmt;

/// Broad classification used to pick a handling strategy at call sites:
/// login redirect, inline error state, toast, or log-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unusable session; resolved by signing in again.
    Auth,
    /// Transport-level failure.
    Network,
    /// The backend answered with an error status.
    Server,
    /// Local persistence failure.
    Storage,
    /// Third-party media upload failure.
    Upload,
    /// Environment configuration problem.
    Configuration,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Upload => "upload",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
