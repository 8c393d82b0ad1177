use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractedDocument, PageText, PdfExtractError, PdfExtractor};

/// PDF text extraction backed by `pdf_oxide`. Parsing is CPU-bound, so the
/// whole document is read on a blocking task.
#[derive(Default)]
pub struct PdfOxideExtractor;

impl PdfOxideExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_document(path: &Path) -> Result<ExtractedDocument, PdfExtractError> {
        let mut doc =
            PdfDocument::open(path).map_err(|e| PdfExtractError::Open(e.to_string()))?;

        let page_count = doc
            .page_count()
            .map_err(|e| PdfExtractError::ExtractionFailed(format!("page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            // A page that fails to decode yields no text rather than
            // aborting the document.
            let text = doc.extract_text(page_index).unwrap_or_default();
            pages.push(PageText {
                number: page_index + 1,
                text,
            });
        }

        Ok(ExtractedDocument { pages, page_count })
    }
}

#[async_trait]
impl PdfExtractor for PdfOxideExtractor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, PdfExtractError> {
        let owned: PathBuf = path.to_path_buf();

        let document = tokio::task::spawn_blocking(move || Self::extract_document(&owned))
            .await
            .map_err(|e| PdfExtractError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = document.page_count, "PDF text extraction complete");
        Ok(document)
    }
}
