//! Client configuration.
//!
//! The base address is assembled from three externally supplied values,
//! the same three the deployment supplies to every install: backend
//! host, port, and API path prefix. Push and media upload carry their
//! own small configs. Everything can be built directly for tests or
//! read from the environment for production wiring.

use crate::error::ConfigError;

/// Environment variable carrying the backend host or IP.
pub const ENV_BACKEND_HOST: &str = "REPVISION_BACKEND_HOST";
/// Environment variable carrying the backend port.
pub const ENV_BACKEND_PORT: &str = "REPVISION_BACKEND_PORT";
/// Environment variable carrying the API path prefix (e.g. `/api`).
pub const ENV_API_PATH: &str = "REPVISION_API_PATH";
/// Environment variable carrying the push provider project id.
pub const ENV_PUSH_PROJECT_ID: &str = "REPVISION_PUSH_PROJECT_ID";
/// Environment variable carrying the media provider cloud name.
pub const ENV_MEDIA_CLOUD_NAME: &str = "REPVISION_MEDIA_CLOUD_NAME";
/// Environment variable carrying the media provider upload preset.
pub const ENV_MEDIA_UPLOAD_PRESET: &str = "REPVISION_MEDIA_UPLOAD_PRESET";

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Backend address configuration.
///
/// All authenticated endpoints are relative to
/// `http://<host>:<port><api_path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub api_path: String,
}

impl ApiConfig {
    pub fn new(host: impl Into<String>, port: u16, api_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            api_path: api_path.into(),
        }
    }

    /// Read the three address components from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_var(ENV_BACKEND_HOST)?;
        let port_raw = env_var(ENV_BACKEND_PORT)?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue {
                var: ENV_BACKEND_PORT,
                message: e.to_string(),
            })?;
        let api_path = env_var(ENV_API_PATH)?;
        Ok(Self::new(host, port, api_path))
    }

    /// The assembled base address, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.api_path)
    }
}

/// Push provider configuration.
///
/// The project id is statically configured per build. A missing id does
/// not fail configuration loading; the registration flow reports it as
/// a provider error when it actually needs the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushConfig {
    pub project_id: Option<String>,
}

impl PushConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            project_id: env_var(ENV_PUSH_PROJECT_ID).ok(),
        }
    }
}

/// Third-party media upload configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl MediaConfig {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: env_var(ENV_MEDIA_CLOUD_NAME)?,
            upload_preset: env_var(ENV_MEDIA_UPLOAD_PRESET)?,
        })
    }
}
