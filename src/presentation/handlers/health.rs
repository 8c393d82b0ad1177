use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub device: String,
    pub accelerator_available: bool,
    pub speech_model_loaded: bool,
    pub text_analyzer_loaded: bool,
}

/// Liveness plus model state. Served even when the speech model failed to
/// load, so operators can see the degraded state.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let device = state.synthesizer.device();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            device: device.to_string(),
            accelerator_available: device != "cpu",
            speech_model_loaded: state.synthesizer.is_available(),
            // The classification model the pipeline never invokes is not
            // wired in this service.
            text_analyzer_loaded: false,
        }),
    )
}
