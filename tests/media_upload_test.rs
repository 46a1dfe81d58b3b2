//! Integration tests for the third-party upload and the
//! upload-then-register submission flow.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repvision::adapters::mock::InMemoryCredentialStore;
use repvision::adapters::ReqwestHttpClient;
use repvision::api::ApiClient;
use repvision::auth::{Session, UserProfile};
use repvision::config::MediaConfig;
use repvision::error::UploadError;
use repvision::media::{submit_for_analysis, MediaUploadClient};
use repvision::models::AnalysisStatus;

fn uploader_for(server: &MockServer) -> MediaUploadClient {
    MediaUploadClient::new(MediaConfig::new("repvision", "unsigned-videos"))
        .with_upload_url(format!("{}/video/upload", server.uri()))
}

fn api_for(server: &MockServer) -> Arc<ApiClient> {
    let store = InMemoryCredentialStore::with_session(Session::new(
        "t1",
        UserProfile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
        },
    ));
    Arc::new(ApiClient::with_base_url(
        format!("{}/api", server.uri()),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store),
    ))
}

#[tokio::test]
async fn upload_extracts_the_secure_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video/upload"))
        .and(body_string_contains("unsigned-videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secure_url": "https://media.example.com/v/41.mp4",
            "public_id": "v/41"
        })))
        .mount(&server)
        .await;

    let url = uploader_for(&server)
        .upload_video(vec![0u8; 64], "upload.mp4")
        .await
        .unwrap();

    assert_eq!(url, "https://media.example.com/v/41.mp4");
}

#[tokio::test]
async fn provider_error_body_maps_to_upload_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Upload preset not found" }
        })))
        .mount(&server)
        .await;

    let err = uploader_for(&server)
        .upload_video(vec![0u8; 64], "upload.mp4")
        .await
        .unwrap_err();

    match err {
        UploadError::Provider(message) => assert_eq!(message, "Upload preset not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn submission_registers_the_uploaded_url_with_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secure_url": "https://media.example.com/v/41.mp4"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/videos/upload"))
        .and(header("Authorization", "Bearer t1"))
        .and(body_string_contains("https://media.example.com/v/41.mp4"))
        .and(body_string_contains("Barbell Curl"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 41,
            "exerciseName": "Barbell Curl",
            "videoUrl": "https://media.example.com/v/41.mp4",
            "status": "PENDING",
            "createdAt": "2026-02-11T09:30:00"
        })))
        .mount(&server)
        .await;

    let analysis = submit_for_analysis(
        &uploader_for(&server),
        &api_for(&server),
        vec![0u8; 64],
        "upload.mp4",
        "Barbell Curl",
    )
    .await
    .unwrap();

    assert_eq!(analysis.id, 41);
    assert_eq!(analysis.status, AnalysisStatus::Pending);
    assert_eq!(analysis.exercise_name, "Barbell Curl");
}

#[tokio::test]
async fn failed_upload_never_reaches_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/video/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "File too large" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/videos/upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = submit_for_analysis(
        &uploader_for(&server),
        &api_for(&server),
        vec![0u8; 64],
        "upload.mp4",
        "Squat",
    )
    .await;

    assert!(result.is_err());
}
