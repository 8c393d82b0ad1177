use serde::Serialize;

use super::segment::ProcessedSegment;

/// Registry entry for one job. Serialized untagged: clients distinguish the
/// in-progress view from the terminal result by shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JobState {
    InProgress(JobProgress),
    Completed(JobResult),
}

/// In-progress (or failed) view of a job. Overwritten wholesale on every
/// phase transition, never merged.
#[derive(Debug, Clone, Serialize)]
pub struct JobProgress {
    pub stage: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Terminal view of a successfully completed job.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub job_id: String,
    pub segments: Vec<ProcessedSegment>,
    pub total_pages: usize,
    pub status: String,
}

impl JobState {
    pub fn in_progress(stage: impl Into<String>, progress: u8) -> Self {
        Self::InProgress(JobProgress {
            stage: stage.into(),
            progress,
            message: None,
        })
    }

    /// Terminal failure state: the stage embeds the error text, progress is
    /// reset to 0 and the message carries the error verbatim.
    pub fn failed(error: &str) -> Self {
        Self::InProgress(JobProgress {
            stage: format!("Error: {error}"),
            progress: 0,
            message: Some(error.to_string()),
        })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
