use serde::Serialize;

/// One paragraph-sized unit of extracted document text, before any
/// speech-oriented processing. Stamped with its 1-based source page and the
/// page count of the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub text: String,
    pub page: usize,
    pub total_pages: usize,
}

/// A segment after figure-reference detection and speech cleanup.
///
/// Invariant: `has_figure_reference` is true exactly when
/// `figure_references` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedSegment {
    pub text: String,
    pub page: usize,
    pub has_figure_reference: bool,
    pub figure_references: Vec<String>,
}
