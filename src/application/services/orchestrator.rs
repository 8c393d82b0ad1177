use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::application::ports::{AudioRegistry, JobRegistry, PdfExtractError, SpeechError};
use crate::application::services::{process_segments, AudioSynthesizer, PdfSegmenter};
use crate::domain::{JobId, JobResult, JobState};

pub const STAGE_UPLOADING: &str = "Uploading file...";
const STAGE_EXTRACTING: &str = "Extracting text from PDF...";
const STAGE_ANALYZING: &str = "Analyzing content for voice processing...";
const STAGE_GENERATING: &str = "Generating AI voice...";
const STAGE_FINALIZING: &str = "Finalizing...";

/// Drives the end-to-end pipeline for one uploaded document and owns the
/// job's registry entry for its whole lifetime.
///
/// Phase sequence, each overwriting the entry wholesale with monotonically
/// non-decreasing progress: extract (20), analyze (40), generate (60..90,
/// interpolated per attempted segment), finalize (100), then the terminal
/// result. Any uncaught failure overwrites the entry with a failed state.
pub struct JobOrchestrator {
    jobs: Arc<dyn JobRegistry>,
    audio: Arc<dyn AudioRegistry>,
    segmenter: PdfSegmenter,
    synthesizer: AudioSynthesizer,
    continue_on_segment_failure: bool,
    tasks: Mutex<HashMap<JobId, JoinHandle<()>>>,
}

impl JobOrchestrator {
    pub fn new(
        jobs: Arc<dyn JobRegistry>,
        audio: Arc<dyn AudioRegistry>,
        segmenter: PdfSegmenter,
        synthesizer: AudioSynthesizer,
        continue_on_segment_failure: bool,
    ) -> Self {
        Self {
            jobs,
            audio,
            segmenter,
            synthesizer,
            continue_on_segment_failure,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Launches one background orchestration run. The task handle is kept
    /// per job identifier while the job runs, so a later cancellation
    /// surface can reach it; the polling contract does not depend on it.
    ///
    /// The map lock is held across the spawn so the task cannot observe the
    /// map before its own handle is inserted.
    pub fn spawn(self: &Arc<Self>, job_id: JobId, pdf_path: PathBuf, request_id: String) {
        let orchestrator = Arc::clone(self);
        let mut tasks = self.tasks.lock();
        let handle = tokio::spawn(async move {
            orchestrator.run(job_id, &pdf_path, &request_id).await;
            orchestrator.tasks.lock().remove(&job_id);
        });
        tasks.insert(job_id, handle);
    }

    /// Number of jobs with a live background task.
    pub fn tracked_jobs(&self) -> usize {
        self.tasks.lock().len()
    }

    pub async fn run(&self, job_id: JobId, pdf_path: &Path, request_id: &str) {
        let span = tracing::info_span!(
            "processing_job",
            job_id = %job_id.as_uuid(),
            request_id = %request_id
        );

        if let Err(e) = self.process(job_id, pdf_path).instrument(span).await {
            tracing::error!(job_id = %job_id.as_uuid(), error = %e, "Processing job failed");
            self.jobs.put(job_id, JobState::failed(&e.to_string()));
        }
    }

    async fn process(&self, job_id: JobId, pdf_path: &Path) -> Result<(), OrchestrationError> {
        self.jobs
            .put(job_id, JobState::in_progress(STAGE_EXTRACTING, 20));

        let raw_segments = self.segmenter.segment(pdf_path).await?;

        // Page count travels on the segments; a document with no surviving
        // segments reports 0 here regardless of its actual page count.
        let total_pages = raw_segments.first().map_or(0, |s| s.total_pages);

        self.jobs
            .put(job_id, JobState::in_progress(STAGE_ANALYZING, 40));

        let segments = process_segments(raw_segments);

        self.jobs
            .put(job_id, JobState::in_progress(STAGE_GENERATING, 60));

        let audio_dir = std::env::temp_dir().join(format!("papervoice-audio-{}", job_id.as_uuid()));
        tokio::fs::create_dir_all(&audio_dir).await?;
        self.audio.init(job_id);

        let total = segments.len();
        for (index, segment) in segments.iter().enumerate() {
            match self
                .synthesizer
                .synthesize_segment(segment, &audio_dir, index)
                .await
            {
                Ok(path) => self.audio.push(&job_id, path),
                Err(e) if self.continue_on_segment_failure => {
                    tracing::warn!(segment = index, error = %e, "Skipping failed segment");
                }
                Err(e) => return Err(OrchestrationError::Synthesis(e)),
            }

            // Progress tracks segments attempted, not succeeded, over the
            // fixed denominator of total segments.
            let progress = (60 + 30 * (index + 1) / total) as u8;
            self.jobs.put(
                job_id,
                JobState::in_progress(
                    format!("Generating audio segment {}/{}...", index + 1, total),
                    progress,
                ),
            );
        }

        self.jobs
            .put(job_id, JobState::in_progress(STAGE_FINALIZING, 100));

        let segment_count = segments.len();
        self.jobs.put(
            job_id,
            JobState::Completed(JobResult {
                job_id: job_id.as_uuid().to_string(),
                segments,
                total_pages,
                status: "completed".to_string(),
            }),
        );

        tracing::info!(segment_count, total_pages, "Processing completed");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error("text extraction: {0}")]
    Extraction(#[from] PdfExtractError),
    #[error("audio synthesis: {0}")]
    Synthesis(#[from] SpeechError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
