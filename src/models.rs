//! Wire types for the RepVision backend API.
//!
//! The backend serializes JSON in camelCase; every struct here mirrors
//! that contract. Unknown fields are ignored so older and newer backend
//! builds stay readable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of POST /auth/login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of POST /auth/register.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Reply of POST /auth/login: the token and the profile that together
/// become the stored session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub email: String,
    pub full_name: String,
}

/// One unread notification. The client only tracks the unread working
/// set; acknowledged items leave it and are not kept around.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: i64,
    pub title: String,
    pub message: String,
}

/// Aggregate accuracy counters from GET /videos/my-summary.
/// Replaced wholesale on every fetch; there is no partial update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_completed_videos: u64,
    pub total_correct_reps: u64,
    pub total_wrong_reps: u64,
    pub overall_accuracy: f64,
    #[serde(default)]
    pub most_common_mistake: Option<String>,
}

/// One entry of GET /videos/my-analysis-categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCategory {
    pub exercise_name: String,
    pub count: u64,
}

/// Analysis pipeline state of a submitted video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Pending,
    Completed,
}

/// One analyzed (or queued) video, as listed by
/// GET /videos/my-videos-by-category and returned by POST /videos/upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysis {
    pub id: i64,
    pub exercise_name: String,
    pub video_url: String,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub correct_reps: Option<i32>,
    #[serde(default)]
    pub wrong_reps: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Body of POST /videos/upload. Carries the already-uploaded media URL,
/// never the file itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadRequest {
    pub video_url: String,
    pub exercise_name: String,
}

/// Body of POST /user/register-push-token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushTokenRequest {
    pub push_token: String,
}
