//! In-memory snapshot store.

use crate::store::{Snapshot, SnapshotStore, StoreError};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Keeps the encoded snapshot in a shared slot.
///
/// Clones share the slot, so a test can hold one handle while the table
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw stored text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// Returns the raw stored text.
    pub fn raw(&self) -> Result<Option<String>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::new("Memory store lock poisoned"))?;
        Ok(slot.clone())
    }
}

impl SnapshotStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let raw = self.raw()?;
        debug!(present = raw.is_some(), "Loading from memory");
        Ok(raw.as_deref().and_then(Snapshot::decode))
    }

    #[instrument(skip(self, snapshot))]
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let encoded = snapshot.encode()?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::new("Memory store lock poisoned"))?;
        *slot = Some(encoded);
        debug!("Saved to memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    #[test]
    fn test_empty_store_loads_nothing() {
        assert_eq!(MemoryStore::new().load().unwrap(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let snapshot = Snapshot::new(Ledger::new(10), vec![]);
        store.save(&snapshot).unwrap();
        assert_eq!(handle.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_malformed_raw_loads_nothing() {
        let store = MemoryStore::with_raw("{\"balances\":");
        assert_eq!(store.load().unwrap(), None);
    }
}
