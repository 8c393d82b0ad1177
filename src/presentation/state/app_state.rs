use std::sync::Arc;

use crate::application::ports::{AudioRegistry, JobRegistry};
use crate::application::services::{AudioSynthesizer, JobOrchestrator};
use crate::presentation::config::Settings;

pub struct AppState {
    pub jobs: Arc<dyn JobRegistry>,
    pub audio: Arc<dyn AudioRegistry>,
    pub orchestrator: Arc<JobOrchestrator>,
    pub synthesizer: AudioSynthesizer,
    pub settings: Settings,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            jobs: Arc::clone(&self.jobs),
            audio: Arc::clone(&self.audio),
            orchestrator: Arc::clone(&self.orchestrator),
            synthesizer: self.synthesizer.clone(),
            settings: self.settings.clone(),
        }
    }
}
