use std::path::PathBuf;

use crate::domain::{JobId, JobState};

/// Process-lifetime mapping from job identifier to that job's current state.
///
/// Writes are last-write-wins and entries are never deleted. Single writer
/// per key: only the one orchestration task spawned for a job identifier
/// ever writes that identifier's entry, so implementations need no
/// per-entry coordination beyond making individual operations atomic.
pub trait JobRegistry: Send + Sync {
    fn put(&self, id: JobId, state: JobState);

    fn get(&self, id: &JobId) -> Option<JobState>;
}

/// Ordered list of rendered waveform paths per job, in synthesis order.
/// Failed segments are skipped, not padded, so the list may be shorter than
/// the job's segment count. Not transactionally coupled to the job registry;
/// a mid-job reader may observe the two out of step.
pub trait AudioRegistry: Send + Sync {
    fn init(&self, id: JobId);

    fn push(&self, id: &JobId, path: PathBuf);

    fn get(&self, id: &JobId) -> Option<Vec<PathBuf>>;
}
