use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use async_trait::async_trait;

use crate::application::ports::{SpeechEngine, SpeechError};

/// Speech synthesis via a local `piper` process: text is piped to stdin and
/// the engine writes the waveform to the requested output path. Each call
/// runs on a blocking task; a call has no timeout, so a hung engine stalls
/// only the job that made it.
pub struct PiperEngine {
    binary: PathBuf,
    model: PathBuf,
}

impl PiperEngine {
    /// Fails when the voice model file is missing. Callers treat the failure
    /// as a degraded state rather than aborting the process.
    pub fn new(binary: PathBuf, model: PathBuf) -> Result<Self, SpeechError> {
        if !model.is_file() {
            return Err(SpeechError::ModelLoadFailed(format!(
                "voice model not found: {}",
                model.display()
            )));
        }
        Ok(Self { binary, model })
    }

    fn run_piper(
        binary: &Path,
        model: &Path,
        text: &str,
        output: &Path,
    ) -> Result<(), SpeechError> {
        let mut child = Command::new(binary)
            .arg("--model")
            .arg(model)
            .arg("--output_file")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::SynthesisFailed(format!("failed to spawn piper: {e}")))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| SpeechError::SynthesisFailed(format!("failed to write text: {e}")))?;
        }

        let status = child
            .wait()
            .map_err(|e| SpeechError::SynthesisFailed(format!("failed to wait on piper: {e}")))?;

        if !status.success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "piper exited with status {status}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl SpeechEngine for PiperEngine {
    #[tracing::instrument(skip(self, text), fields(output = %output.display()))]
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SpeechError> {
        let binary = self.binary.clone();
        let model = self.model.clone();
        let text = text.to_string();
        let output = output.to_path_buf();

        tokio::task::spawn_blocking(move || Self::run_piper(&binary, &model, &text, &output))
            .await
            .map_err(|e| SpeechError::SynthesisFailed(format!("task join error: {e}")))?
    }

    fn device(&self) -> &'static str {
        "cpu"
    }
}
