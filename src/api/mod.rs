//! Authenticated request execution and the backend REST surface.
//!
//! [`ApiClient`] is the single gate for network traffic to the
//! RepVision backend. The raw [`ApiClient::request`] executor loads the
//! session, refuses to touch the network without one, attaches the
//! bearer token, and hands back the response verbatim, whatever its
//! status. The typed endpoint methods wrap it for the sync layer,
//! parsing 2xx bodies and turning non-2xx statuses into
//! [`ApiError::Server`] for inline surfacing.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AnalysisCategory, AnalysisSummary, AuthResponse, LoginRequest, NotificationItem,
    PushTokenRequest, RegisterRequest, VideoAnalysis, VideoUploadRequest,
};
use crate::traits::{CredentialStore, Headers, HttpClient, HttpError, Response};

/// HTTP method of an executor request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Options for a raw executor request: method, optional JSON body, and
/// extra headers. Caller headers override the executor defaults on
/// conflict.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Headers,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: None,
            headers: Headers::new(),
        }
    }

    pub fn post() -> Self {
        Self {
            method: Method::Post,
            body: None,
            headers: Headers::new(),
        }
    }

    /// Attach a raw body string.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a JSON-encoded body.
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|e| ApiError::Other(e.to_string()))?;
        Ok(self.with_body(body))
    }

    /// Add a header. Overrides the executor default of the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Client for the RepVision backend.
///
/// Holds the assembled base address and the injected transport and
/// credential store. Cheap to clone behind `Arc`s; the session itself
/// is re-read from the store on every call, so sign-in and sign-out
/// take effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    store: Arc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>, store: Arc<dyn CredentialStore>) -> Self {
        Self::with_base_url(config.base_url(), http, store)
    }

    /// Build against an explicit base URL (used by tests against a mock
    /// server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(err: HttpError) -> ApiError {
        match err {
            HttpError::ConnectionFailed(msg) => ApiError::ConnectionFailed(msg),
            HttpError::Timeout(msg) => ApiError::Timeout(msg),
            HttpError::InvalidUrl(msg) => ApiError::InvalidUrl(msg),
            HttpError::Io(msg) | HttpError::Other(msg) => ApiError::Other(msg),
        }
    }

    /// Execute an authenticated request.
    ///
    /// Fails with [`ApiError::AuthMissing`] before any network I/O when
    /// no session is stored. A failed storage read is treated the same
    /// way: the user is effectively signed out. The response comes back
    /// verbatim; this method never inspects the status.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, ApiError> {
        let session = match self.store.load().await {
            Ok(Some(session)) => session,
            Ok(None) => return Err(ApiError::AuthMissing),
            Err(e) => {
                warn!(code = e.error_code(), "session read failed, treating as signed out: {e}");
                return Err(ApiError::AuthMissing);
            }
        };

        let url = format!("{}{}", self.base_url, endpoint);
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", session.token),
        );
        // Caller headers win on conflict.
        headers.extend(options.headers);

        debug!(endpoint, method = ?options.method, "issuing authenticated request");

        let result = match options.method {
            Method::Get => self.http.get(&url, &headers).await,
            Method::Post => {
                self.http
                    .post(&url, options.body.as_deref().unwrap_or(""), &headers)
                    .await
            }
        };

        result.map_err(Self::classify)
    }

    /// Execute an unauthenticated POST (login and register only).
    async fn post_public(&self, endpoint: &str, body: String) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        self.http
            .post(&url, &body, &headers)
            .await
            .map_err(Self::classify)
    }

    fn server_error(response: &Response) -> ApiError {
        ApiError::Server {
            status: response.status,
            message: response.text().unwrap_or_default(),
        }
    }

    fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(Self::server_error(&response));
        }
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn expect_success(response: Response) -> Result<(), ApiError> {
        if !response.is_success() {
            return Err(Self::server_error(&response));
        }
        Ok(())
    }

    // --- auth endpoints (no token required) ---

    /// POST /auth/login. Non-2xx carries the server's error text, which
    /// the login screen shows verbatim.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Other(e.to_string()))?;
        let response = self.post_public("/auth/login", body).await?;
        Self::parse(response)
    }

    /// POST /auth/register.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Other(e.to_string()))?;
        let response = self.post_public("/auth/register", body).await?;
        Self::expect_success(response)
    }

    // --- video endpoints ---

    /// GET /videos/my-summary.
    pub async fn my_summary(&self) -> Result<AnalysisSummary, ApiError> {
        let response = self.request("/videos/my-summary", RequestOptions::get()).await?;
        Self::parse(response)
    }

    /// GET /videos/my-analysis-categories.
    pub async fn my_analysis_categories(&self) -> Result<Vec<AnalysisCategory>, ApiError> {
        let response = self
            .request("/videos/my-analysis-categories", RequestOptions::get())
            .await?;
        Self::parse(response)
    }

    /// GET /videos/my-videos-by-category?exerciseName=…
    pub async fn my_videos_by_category(
        &self,
        exercise_name: &str,
    ) -> Result<Vec<VideoAnalysis>, ApiError> {
        let endpoint = format!(
            "/videos/my-videos-by-category?exerciseName={}",
            urlencoding::encode(exercise_name)
        );
        let response = self.request(&endpoint, RequestOptions::get()).await?;
        Self::parse(response)
    }

    /// POST /videos/upload — registers an already-uploaded media URL.
    pub async fn register_video(
        &self,
        request: &VideoUploadRequest,
    ) -> Result<VideoAnalysis, ApiError> {
        let options = RequestOptions::post().with_json(request)?;
        let response = self.request("/videos/upload", options).await?;
        Self::parse(response)
    }

    // --- notification endpoints ---

    /// GET /notifications/my-unread.
    pub async fn my_unread(&self) -> Result<Vec<NotificationItem>, ApiError> {
        let response = self
            .request("/notifications/my-unread", RequestOptions::get())
            .await?;
        Self::parse(response)
    }

    /// GET /notifications/my-unread-count. The body is a bare integer.
    pub async fn my_unread_count(&self) -> Result<u64, ApiError> {
        let response = self
            .request("/notifications/my-unread-count", RequestOptions::get())
            .await?;
        Self::parse(response)
    }

    /// POST /notifications/mark-read/{id}.
    pub async fn mark_read(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = format!("/notifications/mark-read/{id}");
        let response = self.request(&endpoint, RequestOptions::post()).await?;
        Self::expect_success(response)
    }

    // --- user endpoints ---

    /// POST /user/register-push-token.
    pub async fn register_push_token(&self, push_token: &str) -> Result<(), ApiError> {
        let request = PushTokenRequest {
            push_token: push_token.to_string(),
        };
        let options = RequestOptions::post().with_json(&request)?;
        let response = self.request("/user/register-push-token", options).await?;
        Self::expect_success(response)
    }
}
