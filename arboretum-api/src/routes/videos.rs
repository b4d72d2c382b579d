/// Video endpoints
///
/// - `POST /upload-video` - Store a base64 video data URI
/// - `GET  /videos` - List all videos

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{required, AppJson},
};
use arboretum_shared::models::video::Video;
use axum::{extract::State, Json};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static VIDEO_DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:video/[A-Za-z0-9_]+;base64,").expect("video data URI pattern is valid")
});

/// Whether `payload` starts with a `data:video/<subtype>;base64,` prefix
pub fn is_video_data_uri(payload: &str) -> bool {
    VIDEO_DATA_URI.is_match(payload)
}

/// Upload request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadVideoRequest {
    #[validate(
        required(message = "videoBase64 is required"),
        length(min = 1, message = "videoBase64 is required")
    )]
    pub video_base64: Option<String>,
}

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadVideoResponse {
    pub message: String,
    pub video: Video,
}

/// Stores a video
///
/// ```text
/// POST /upload-video
/// { "videoBase64": "data:video/mp4;base64,AAAA..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Payload missing or not a video data URI
pub async fn upload_video(
    State(state): State<AppState>,
    AppJson(req): AppJson<UploadVideoRequest>,
) -> ApiResult<Json<UploadVideoResponse>> {
    req.validate()?;
    let video = required(req.video_base64, "videoBase64")?;

    if !is_video_data_uri(&video) {
        return Err(ApiError::BadRequest("Invalid base64 video format".to_string()));
    }

    let video = state.store.create_video(video).await?;

    tracing::info!(video_id = %video.id, "Video uploaded");

    Ok(Json(UploadVideoResponse {
        message: "Video uploaded successfully".to_string(),
        video,
    }))
}

/// Lists every video
pub async fn list_videos(State(state): State<AppState>) -> ApiResult<Json<Vec<Video>>> {
    Ok(Json(state.store.list_videos().await?))
}
