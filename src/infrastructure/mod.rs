pub mod observability;
pub mod pdf;
pub mod registry;
pub mod speech;
pub mod text_processing;
