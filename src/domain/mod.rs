mod job;
mod job_state;
mod segment;

pub use job::JobId;
pub use job_state::{JobProgress, JobResult, JobState};
pub use segment::{ProcessedSegment, RawSegment};
