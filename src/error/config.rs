//! Configuration error types.

use thiserror::Error;

/// Errors raised while assembling configuration from the environment.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    /// A variable was present but could not be parsed.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingVar(var) => {
                format!("The app is missing its {var} setting.")
            }
            ConfigError::InvalidValue { var, .. } => {
                format!("The {var} setting is invalid.")
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingVar(_) => "E_CONFIG_MISSING",
            ConfigError::InvalidValue { .. } => "E_CONFIG_INVALID",
        }
    }
}
