mod pdf_oxide_extractor;

pub use pdf_oxide_extractor::PdfOxideExtractor;
