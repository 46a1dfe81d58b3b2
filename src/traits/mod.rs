//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP operations (GET, POST)
//! - [`CredentialStore`] - durable session storage
//! - [`PushPlatform`] - device push capability and permissions

pub mod credentials;
pub mod http;
pub mod push;

pub use credentials::CredentialStore;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use push::{PermissionStatus, PushPlatform, PushProviderError};
