use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{SpeechEngine, SpeechError};
use crate::domain::ProcessedSegment;

/// Renders one processed segment to a waveform file via the speech engine.
///
/// The engine is optional: when model loading failed at startup the service
/// runs degraded, and every synthesis attempt reports `EngineUnavailable`
/// instead of crashing the process.
#[derive(Clone)]
pub struct AudioSynthesizer {
    engine: Option<Arc<dyn SpeechEngine>>,
}

impl AudioSynthesizer {
    pub fn new(engine: Option<Arc<dyn SpeechEngine>>) -> Self {
        Self { engine }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    pub fn device(&self) -> &'static str {
        self.engine.as_deref().map_or("cpu", |e| e.device())
    }

    /// Output file is named deterministically from the segment's position,
    /// zero-padded to 4 digits.
    pub async fn synthesize_segment(
        &self,
        segment: &ProcessedSegment,
        output_dir: &Path,
        index: usize,
    ) -> Result<PathBuf, SpeechError> {
        let engine = self.engine.as_ref().ok_or(SpeechError::EngineUnavailable)?;

        let output = output_dir.join(format!("segment_{index:04}.wav"));
        engine.synthesize(&spoken_text(segment), &output).await?;

        Ok(output)
    }

    /// Ad-hoc synthesis of already-cleaned text, outside the job pipeline.
    pub async fn synthesize_text(&self, text: &str, output: &Path) -> Result<(), SpeechError> {
        let engine = self.engine.as_ref().ok_or(SpeechError::EngineUnavailable)?;
        engine.synthesize(text, output).await
    }
}

/// The literal text spoken for a segment: when the segment references
/// figures, a spoken announcement naming them is prepended.
pub fn spoken_text(segment: &ProcessedSegment) -> String {
    if segment.has_figure_reference {
        format!(
            "Please refer to {} mentioned in this section. {}",
            segment.figure_references.join(", "),
            segment.text
        )
    } else {
        segment.text.clone()
    }
}
