//! Snapshot stored as a JSON file.

use crate::store::{Snapshot, SnapshotStore, StoreError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Stores the snapshot in one JSON file.
///
/// Saves write a sibling temporary file and rename it over the target, so
/// a crash mid-save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given file path. The file need not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating JsonFileStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot file yet");
                return Ok(None);
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(error = %e, "Snapshot file is not text, ignoring it");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Snapshot::decode(&raw))
    }

    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let encoded = snapshot.encode()?;
        let temp = self.temp_path();
        std::fs::write(&temp, encoded)?;
        std::fs::rename(&temp, &self.path)?;
        debug!("Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("table.json"));
        let snapshot = Snapshot::new(Ledger::with_balances(900, 1100), vec!["O wins".into()]);

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_corrupt_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, "{{{{").unwrap();
        assert_eq!(JsonFileStore::new(&path).load().unwrap(), None);
    }
}
