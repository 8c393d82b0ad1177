use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::JobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves the rendered waveform for one segment, by zero-based position in
/// the job's audio list.
#[tracing::instrument(skip(state))]
pub async fn segment_audio_handler(
    State(state): State<AppState>,
    Path((job_id, segment_index)): Path<(String, usize)>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    let paths = match state.audio.get(&JobId::from_uuid(uuid)) {
        Some(p) => p,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Audio files not found".to_string(),
                }),
            )
                .into_response();
        }
    };

    let path = match paths.get(segment_index) {
        Some(p) => p,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Segment not found".to_string(),
                }),
            )
                .into_response();
        }
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/wav".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"segment_{}.wav\"", segment_index),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Audio file missing on disk");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Audio file not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}
