//! Snapshot type and the store trait.

use crate::ledger::Ledger;
use crate::store::StoreError;
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// What survives between sessions: balances and history.
///
/// Serialized as `{"balances": {"X": n, "O": n}, "history": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Dissolve, derive_new::new)]
pub struct Snapshot {
    balances: Ledger,
    #[serde(default)]
    history: Vec<String>,
}

impl Snapshot {
    /// Encodes the snapshot as JSON.
    pub fn encode(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes stored JSON. Malformed data counts as no data.
    #[instrument(skip(raw), fields(len = raw.len()))]
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "Stored snapshot is malformed, ignoring it");
                None
            }
        }
    }
}

/// Load/save of the table snapshot.
///
/// `load` returns `Ok(None)` when nothing usable is stored, including
/// malformed data. Errors are for storage that could not be reached.
pub trait SnapshotStore {
    /// Loads the stored snapshot, if any.
    fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}
