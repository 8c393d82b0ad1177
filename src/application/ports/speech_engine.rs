use std::path::Path;

use async_trait::async_trait;

/// Text-to-speech collaborator: renders a text string to a playable waveform
/// file at the destination path. A single synthesis call is long-running and
/// compute-bound; implementations must run it off the async scheduler (e.g.
/// `spawn_blocking`) so status polls stay responsive while a job is in
/// flight. No timeout is enforced on a call.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SpeechError>;

    /// Compute device the engine renders on, for health reporting.
    fn device(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech model not available")]
    EngineUnavailable,
    #[error("speech model failed to load: {0}")]
    ModelLoadFailed(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
}
