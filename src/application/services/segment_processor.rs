use crate::domain::{ProcessedSegment, RawSegment};
use crate::infrastructure::text_processing::{clean_for_speech, detect_figure_references};

/// Turns raw segments into processed ones, 1:1 and order-preserving.
///
/// Detection runs on the raw text before cleaning rewrites it; the cleaner
/// only touches spacing and abbreviations, but the detector's expectations
/// are calibrated against unmodified extraction output.
pub fn process_segments(segments: Vec<RawSegment>) -> Vec<ProcessedSegment> {
    segments
        .into_iter()
        .map(|segment| {
            let references = detect_figure_references(&segment.text);
            let cleaned = clean_for_speech(&segment.text);

            ProcessedSegment {
                text: cleaned,
                page: segment.page,
                has_figure_reference: references.has_figure_reference,
                figure_references: references.figure_references,
            }
        })
        .collect()
}
