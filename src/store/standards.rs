use crate::libs::standards::{Standards, StandardsPatch};
use parking_lot::RwLock;

/// Loads and updates the account's working-time standards.
pub trait StandardsStore {
    fn standards(&self) -> Standards;
    fn update(&self, patch: StandardsPatch);
}

/// In-memory standards store seeded with the defaults.
#[derive(Debug, Default)]
pub struct MemoryStandards {
    inner: RwLock<Standards>,
}

impl MemoryStandards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standards(standards: Standards) -> Self {
        Self { inner: RwLock::new(standards) }
    }
}

impl StandardsStore for MemoryStandards {
    fn standards(&self) -> Standards {
        self.inner.read().clone()
    }

    fn update(&self, patch: StandardsPatch) {
        self.inner.write().apply(patch);
    }
}
