//! Error handling for the RepVision client core.
//!
//! The taxonomy mirrors the failure model of the session layer:
//!
//! - [`ApiError`] — the authenticated executor and its typed wrappers,
//!   including the fail-fast [`ApiError::AuthMissing`] precondition
//! - [`StorageError`] — durable local persistence
//! - [`UploadError`] — the third-party media upload step
//! - [`ConfigError`] — environment configuration
//! - [`ClientError`] — unified type with [`ErrorCategory`], a user
//!   message, and a `requires_login()` signal
//!
//! Propagation policy: `AuthMissing` is always handled by redirecting to
//! the login screen; server and network failures are surfaced inline at
//! the call site; nothing in this layer is retried automatically.

mod api;
mod category;
mod client;
mod config;
mod storage;
mod upload;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use client::{ClientError, ClientResult};
pub use config::ConfigError;
pub use storage::StorageError;
pub use upload::UploadError;
