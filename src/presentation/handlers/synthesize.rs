use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::SpeechError;
use crate::infrastructure::text_processing::clean_for_speech;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    /// Accepted for API compatibility; the engine does not apply it.
    #[serde(default)]
    pub speed: Option<f32>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Cleans and synthesizes arbitrary text immediately, outside the job
/// pipeline, returning the waveform in the response.
#[tracing::instrument(skip(state, request))]
pub async fn synthesize_text_handler(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> impl IntoResponse {
    if !state.synthesizer.is_available() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "TTS model not available".to_string(),
            }),
        )
            .into_response();
    }

    if let Some(speed) = request.speed {
        tracing::debug!(speed, "Speed parameter accepted but not applied");
    }

    let cleaned = clean_for_speech(&request.text);

    let output = match tempfile::Builder::new()
        .prefix("papervoice-")
        .suffix(".wav")
        .tempfile()
    {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create temp file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create output file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if let Err(e) = state.synthesizer.synthesize_text(&cleaned, output.path()).await {
        tracing::error!(error = %e, "Ad-hoc synthesis failed");
        let status = match e {
            SpeechError::EngineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        return (
            status,
            Json(ErrorResponse {
                error: format!("Error generating audio: {}", e),
            }),
        )
            .into_response();
    }

    match tokio::fs::read(output.path()).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/wav".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"synthesized_audio.wav\"".to_string(),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read synthesized audio");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Error reading audio: {}", e),
                }),
            )
                .into_response()
        }
    }
}
