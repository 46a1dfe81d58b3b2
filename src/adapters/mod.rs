//! Adapter implementations of the trait seams.
//!
//! Production adapters wire the client to reqwest, the session file,
//! and the platform push capability; the `mock` module carries the
//! test doubles.

pub mod file_credentials;
pub mod mock;
pub mod reqwest_http;
pub mod unsupported_push;

pub use file_credentials::FileCredentialStore;
pub use reqwest_http::ReqwestHttpClient;
pub use unsupported_push::UnsupportedPushPlatform;
