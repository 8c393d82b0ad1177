mod orchestrator;
mod segment_processor;
mod segmenter;
mod synthesizer;

pub use orchestrator::{JobOrchestrator, OrchestrationError, STAGE_UPLOADING};
pub use segment_processor::process_segments;
pub use segmenter::{PdfSegmenter, MIN_SEGMENT_CHARS};
pub use synthesizer::{spoken_text, AudioSynthesizer};
