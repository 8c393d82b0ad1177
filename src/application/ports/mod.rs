mod pdf_extractor;
mod registry;
mod speech_engine;

pub use pdf_extractor::{ExtractedDocument, PageText, PdfExtractError, PdfExtractor};
pub use registry::{AudioRegistry, JobRegistry};
pub use speech_engine::{SpeechEngine, SpeechError};
