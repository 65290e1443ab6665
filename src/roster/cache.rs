use crate::models::roster::RosterSnapshot;
use std::sync::{Arc, RwLock};

/// Shared, atomically swappable view of the current roster.
///
/// Readers grab an `Arc` to an immutable snapshot and release the
/// lock immediately, so in-flight checks keep the roster they started
/// with even while a reload swaps in a new one.
pub struct RosterCache {
    current: RwLock<Arc<RosterSnapshot>>,
}

impl RosterCache {
    pub fn new(snapshot: RosterSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn snapshot(&self) -> Arc<RosterSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn swap(&self, snapshot: RosterSnapshot) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for RosterCache {
    fn default() -> Self {
        Self::new(RosterSnapshot::default())
    }
}
