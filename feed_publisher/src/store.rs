//! Latest-snapshot storage for a publisher.
//!
//! Holds at most one snapshot per instrument; each insert fully replaces the
//! previous value (last-write-wins, no history). Absence of a snapshot is a
//! valid, queryable state rather than an error.

use std::collections::HashMap;

use feed_common::InstrumentId;

/// Map from instrument to its latest snapshot of type `S`.
#[derive(Debug)]
pub struct InstrumentStore<S> {
    snapshots: HashMap<InstrumentId, S>,
}

impl<S> InstrumentStore<S> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Overwrite the snapshot for `instrument` with `snapshot`.
    pub fn insert(&mut self, instrument: InstrumentId, snapshot: S) {
        self.snapshots.insert(instrument, snapshot);
    }

    /// Latest snapshot for `instrument`, if one was ever recorded.
    pub fn get(&self, instrument: InstrumentId) -> Option<&S> {
        self.snapshots.get(&instrument)
    }

    /// Number of instruments with a recorded snapshot.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<S> Default for InstrumentStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_until_first_insert() {
        let store: InstrumentStore<f64> = InstrumentStore::new();
        assert!(store.get(100).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_is_last_write_wins() {
        let mut store = InstrumentStore::new();
        store.insert(100, 123.45);
        store.insert(100, 130.00);

        assert_eq!(store.get(100), Some(&130.00));
        assert_eq!(store.len(), 1);
    }
}
