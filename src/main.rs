use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use papervoice::application::services::{AudioSynthesizer, JobOrchestrator, PdfSegmenter};
use papervoice::infrastructure::observability::{init_tracing, TracingConfig};
use papervoice::infrastructure::pdf::PdfOxideExtractor;
use papervoice::infrastructure::registry::{InMemoryAudioRegistry, InMemoryJobRegistry};
use papervoice::infrastructure::speech::PiperEngine;
use papervoice::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    // Model-load failure is a degraded state, not a startup failure: the
    // service still serves health checks and job status.
    let engine = match PiperEngine::new(
        settings.speech.piper_binary.clone(),
        settings.speech.model_path.clone(),
    ) {
        Ok(engine) => {
            tracing::info!(model = %settings.speech.model_path.display(), "Speech model loaded");
            Some(Arc::new(engine) as Arc<dyn papervoice::application::ports::SpeechEngine>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Speech model unavailable, starting degraded");
            None
        }
    };

    let jobs = Arc::new(InMemoryJobRegistry::new());
    let audio = Arc::new(InMemoryAudioRegistry::new());
    let segmenter = PdfSegmenter::new(Arc::new(PdfOxideExtractor::new()));
    let synthesizer = AudioSynthesizer::new(engine);

    let orchestrator = Arc::new(JobOrchestrator::new(
        jobs.clone(),
        audio.clone(),
        segmenter,
        synthesizer.clone(),
        settings.processing.continue_on_segment_failure,
    ));

    let state = AppState {
        jobs,
        audio,
        orchestrator,
        synthesizer,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
