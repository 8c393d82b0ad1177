use std::path::Path;

use async_trait::async_trait;

/// Plain text extracted from a single page. `number` is 1-based.
#[derive(Debug, Clone)]
pub struct PageText {
    pub number: usize,
    pub text: String,
}

/// Per-page text plus the page count of the whole document. Pages are
/// returned in document order, including pages with no extractable text;
/// filtering is the segmenter's concern.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub pages: Vec<PageText>,
    pub page_count: usize,
}

#[async_trait]
pub trait PdfExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, PdfExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfExtractError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
