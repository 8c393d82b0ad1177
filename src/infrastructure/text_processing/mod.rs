mod figure_references;
mod text_cleaner;

pub use figure_references::{detect_figure_references, FigureReferences};
pub use text_cleaner::clean_for_speech;
