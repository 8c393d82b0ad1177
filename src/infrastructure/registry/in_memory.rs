use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::application::ports::{AudioRegistry, JobRegistry};
use crate::domain::{JobId, JobState};

/// Process-memory job registry. Entries live for the lifetime of the
/// process; state is lost on restart.
#[derive(Default)]
pub struct InMemoryJobRegistry {
    entries: RwLock<HashMap<JobId, JobState>>,
}

impl InMemoryJobRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobRegistry for InMemoryJobRegistry {
    fn put(&self, id: JobId, state: JobState) {
        self.entries.write().insert(id, state);
    }

    fn get(&self, id: &JobId) -> Option<JobState> {
        self.entries.read().get(id).cloned()
    }
}

/// Process-memory audio path lists, one per job, in synthesis order.
#[derive(Default)]
pub struct InMemoryAudioRegistry {
    entries: RwLock<HashMap<JobId, Vec<PathBuf>>>,
}

impl InMemoryAudioRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioRegistry for InMemoryAudioRegistry {
    fn init(&self, id: JobId) {
        self.entries.write().insert(id, Vec::new());
    }

    fn push(&self, id: &JobId, path: PathBuf) {
        self.entries.write().entry(*id).or_default().push(path);
    }

    fn get(&self, id: &JobId) -> Option<Vec<PathBuf>> {
        self.entries.read().get(id).cloned()
    }
}
