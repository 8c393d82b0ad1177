use std::path::Path;
use std::sync::Arc;

use papervoice::application::ports::{
    ExtractedDocument, PageText, PdfExtractError, PdfExtractor,
};
use papervoice::application::services::{PdfSegmenter, MIN_SEGMENT_CHARS};

/// Extractor returning a fixed set of pages, so segmentation rules can be
/// exercised without a real PDF.
struct FixedExtractor {
    pages: Vec<PageText>,
    page_count: usize,
}

#[async_trait::async_trait]
impl PdfExtractor for FixedExtractor {
    async fn extract(&self, _path: &Path) -> Result<ExtractedDocument, PdfExtractError> {
        Ok(ExtractedDocument {
            pages: self.pages.clone(),
            page_count: self.page_count,
        })
    }
}

struct FailingExtractor;

#[async_trait::async_trait]
impl PdfExtractor for FailingExtractor {
    async fn extract(&self, _path: &Path) -> Result<ExtractedDocument, PdfExtractError> {
        Err(PdfExtractError::Open("corrupt file".to_string()))
    }
}

fn segmenter(pages: Vec<PageText>, page_count: usize) -> PdfSegmenter {
    PdfSegmenter::new(Arc::new(FixedExtractor { pages, page_count }))
}

fn long_paragraph() -> String {
    "x".repeat(MIN_SEGMENT_CHARS + 30)
}

#[tokio::test]
async fn given_whitespace_only_page_when_segmenting_then_page_yields_no_segments() {
    let segmenter = segmenter(
        vec![
            PageText {
                number: 1,
                text: "  \n\t \n".to_string(),
            },
            PageText {
                number: 2,
                text: long_paragraph(),
            },
        ],
        2,
    );

    let segments = segmenter.segment(Path::new("irrelevant.pdf")).await.unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].page, 2);
}

#[tokio::test]
async fn given_paragraph_at_threshold_when_segmenting_then_it_is_discarded() {
    let exactly_threshold = "a".repeat(MIN_SEGMENT_CHARS);
    let one_over = "b".repeat(MIN_SEGMENT_CHARS + 1);
    let segmenter = segmenter(
        vec![PageText {
            number: 1,
            text: format!("{exactly_threshold}\n\n{one_over}"),
        }],
        1,
    );

    let segments = segmenter.segment(Path::new("irrelevant.pdf")).await.unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, one_over);
}

#[tokio::test]
async fn given_multi_paragraph_page_when_segmenting_then_splits_on_blank_lines_and_trims() {
    let first = format!("  {}  ", long_paragraph());
    let second = long_paragraph();
    let segmenter = segmenter(
        vec![PageText {
            number: 3,
            text: format!("{first}\n\n{second}"),
        }],
        5,
    );

    let segments = segmenter.segment(Path::new("irrelevant.pdf")).await.unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, long_paragraph());
    assert!(segments.iter().all(|s| s.page == 3 && s.total_pages == 5));
}

#[tokio::test]
async fn given_document_with_no_extractable_text_when_segmenting_then_returns_empty_not_error() {
    let segmenter = segmenter(
        vec![PageText {
            number: 1,
            text: String::new(),
        }],
        1,
    );

    let segments = segmenter.segment(Path::new("irrelevant.pdf")).await.unwrap();

    assert!(segments.is_empty());
}

#[tokio::test]
async fn given_unreadable_document_when_segmenting_then_propagates_extraction_error() {
    let segmenter = PdfSegmenter::new(Arc::new(FailingExtractor));

    let result = segmenter.segment(Path::new("broken.pdf")).await;

    assert!(matches!(result, Err(PdfExtractError::Open(_))));
}
