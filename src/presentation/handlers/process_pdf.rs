use std::path::Path;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;

use crate::application::services::STAGE_UPLOADING;
use crate::domain::{JobId, JobState};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProcessPdfResponse {
    pub job_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a PDF upload, registers the job and starts a background
/// orchestration run. Responds with the job identifier before any
/// processing happens.
#[tracing::instrument(skip(state, request_id, multipart))]
pub async fn process_pdf_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    if !filename.ends_with(".pdf") {
        tracing::warn!(filename = %filename, "Rejected non-PDF upload");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "File must be a PDF".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let job_id = JobId::new();
    state
        .jobs
        .put(job_id, JobState::in_progress(STAGE_UPLOADING, 0));

    // Uploads land in a per-job scratch directory; nothing cleans them up.
    let upload_dir = std::env::temp_dir().join(format!("papervoice-upload-{}", job_id.as_uuid()));
    let safe_name = Path::new(&filename)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.pdf".to_string());
    let pdf_path = upload_dir.join(safe_name);

    let staged = async {
        tokio::fs::create_dir_all(&upload_dir).await?;
        tokio::fs::write(&pdf_path, &data).await
    }
    .await;

    if let Err(e) = staged {
        tracing::error!(error = %e, "Failed to stage uploaded file");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to store upload: {}", e),
            }),
        )
            .into_response();
    }

    state.orchestrator.spawn(job_id, pdf_path, request_id.0);

    tracing::info!(job_id = %job_id.as_uuid(), filename = %filename, "Processing job started");

    (
        StatusCode::ACCEPTED,
        Json(ProcessPdfResponse {
            job_id: job_id.as_uuid().to_string(),
        }),
    )
        .into_response()
}
