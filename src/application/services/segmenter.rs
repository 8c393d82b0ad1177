use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{PdfExtractError, PdfExtractor};
use crate::domain::RawSegment;

/// Paragraphs at or below this many characters are treated as running
/// headers, footers or captions rather than prose, and dropped.
pub const MIN_SEGMENT_CHARS: usize = 50;

/// Splits an uploaded document into paragraph-level raw segments by driving
/// the PDF extraction collaborator.
#[derive(Clone)]
pub struct PdfSegmenter {
    extractor: Arc<dyn PdfExtractor>,
}

impl PdfSegmenter {
    pub fn new(extractor: Arc<dyn PdfExtractor>) -> Self {
        Self { extractor }
    }

    /// One `RawSegment` per surviving paragraph, stamped with its 1-based
    /// page number and the document's page count. Pages with no extractable
    /// text are skipped; a document with no extractable text at all yields
    /// an empty list, not an error.
    pub async fn segment(&self, path: &Path) -> Result<Vec<RawSegment>, PdfExtractError> {
        let document = self.extractor.extract(path).await?;

        let mut segments = Vec::new();
        for page in &document.pages {
            if page.text.trim().is_empty() {
                continue;
            }

            for paragraph in page.text.split("\n\n") {
                let paragraph = paragraph.trim();
                if paragraph.is_empty() || paragraph.chars().count() <= MIN_SEGMENT_CHARS {
                    continue;
                }

                segments.push(RawSegment {
                    text: paragraph.to_string(),
                    page: page.number,
                    total_pages: document.page_count,
                });
            }
        }

        tracing::debug!(
            segment_count = segments.len(),
            page_count = document.page_count,
            "Document segmented"
        );

        Ok(segments)
    }
}
