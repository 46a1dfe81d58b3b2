//! Third-party media upload.
//!
//! The raw video file never reaches the RepVision backend. It goes to
//! the external object-storage provider first, which answers with a
//! secure URL; that URL plus the exercise name is what the backend's
//! upload endpoint receives.

use serde::Deserialize;
use tracing::info;

use crate::api::ApiClient;
use crate::config::MediaConfig;
use crate::error::{ClientResult, UploadError};
use crate::models::{VideoAnalysis, VideoUploadRequest};

/// Reply shape of the provider's upload endpoint. Either a secure URL
/// or an error object is present.
#[derive(Debug, Deserialize)]
struct ProviderReply {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    error: Option<ProviderErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Client for the external video upload endpoint.
///
/// Uses reqwest directly; the multipart form upload does not go through
/// the authenticated executor because the provider knows nothing about
/// RepVision sessions.
#[derive(Debug, Clone)]
pub struct MediaUploadClient {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl MediaUploadClient {
    pub fn new(config: MediaConfig) -> Self {
        let upload_url = format!(
            "https://api.cloudinary.com/v1_1/{}/video/upload",
            config.cloud_name
        );
        Self {
            client: reqwest::Client::new(),
            upload_url,
            upload_preset: config.upload_preset,
        }
    }

    /// Point the client at an explicit upload URL (tests against a mock
    /// server).
    pub fn with_upload_url(mut self, upload_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Upload a video file; the provider's secure URL is the result.
    pub async fn upload_video(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("video/mp4")
            .map_err(|e| UploadError::Decode(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let reply: ProviderReply =
            serde_json::from_slice(&body).map_err(|e| UploadError::Decode(e.to_string()))?;

        if let Some(error) = reply.error {
            return Err(UploadError::Provider(error.message));
        }
        match reply.secure_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(UploadError::Decode(
                "provider reply carried no secure URL".to_string(),
            )),
        }
    }
}

/// Upload a video and register the resulting URL for analysis.
///
/// The two steps are sequential: a failed upload never reaches the
/// backend, and the backend call is an ordinary authenticated request
/// with the usual error handling.
pub async fn submit_for_analysis(
    media: &MediaUploadClient,
    api: &ApiClient,
    bytes: Vec<u8>,
    file_name: &str,
    exercise_name: &str,
) -> ClientResult<VideoAnalysis> {
    let video_url = media.upload_video(bytes, file_name).await?;
    info!("media upload complete, registering video with backend");

    let analysis = api
        .register_video(&VideoUploadRequest {
            video_url,
            exercise_name: exercise_name.to_string(),
        })
        .await?;
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_url_is_assembled_from_cloud_name() {
        let client = MediaUploadClient::new(MediaConfig::new("repvision", "unsigned-videos"));
        assert_eq!(
            client.upload_url(),
            "https://api.cloudinary.com/v1_1/repvision/video/upload"
        );
    }

    #[test]
    fn upload_url_override() {
        let client = MediaUploadClient::new(MediaConfig::new("repvision", "unsigned-videos"))
            .with_upload_url("http://127.0.0.1:9999/upload");
        assert_eq!(client.upload_url(), "http://127.0.0.1:9999/upload");
    }

    #[test]
    fn provider_reply_parses_both_shapes() {
        let ok: ProviderReply =
            serde_json::from_str(r#"{"secure_url":"https://media.example.com/v/41.mp4"}"#).unwrap();
        assert_eq!(
            ok.secure_url.as_deref(),
            Some("https://media.example.com/v/41.mp4")
        );

        let err: ProviderReply =
            serde_json::from_str(r#"{"error":{"message":"Upload preset not found"}}"#).unwrap();
        assert_eq!(err.error.unwrap().message, "Upload preset not found");
    }
}
