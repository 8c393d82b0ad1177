mod audio;
mod health;
mod job_status;
mod process_pdf;
mod synthesize;

pub use audio::segment_audio_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use process_pdf::process_pdf_handler;
pub use synthesize::synthesize_text_handler;
