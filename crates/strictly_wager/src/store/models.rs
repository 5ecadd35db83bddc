//! Database models for stored snapshots.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use crate::store::{Snapshot, schema};

/// Stored snapshot row.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoredSnapshot {
    storage_key: String,
    payload: String,
    updated_at: NaiveDateTime,
}

impl StoredSnapshot {
    /// Decodes the payload. Malformed payloads count as no snapshot.
    #[instrument(skip(self), fields(storage_key = %self.storage_key))]
    pub fn decode(&self) -> Option<Snapshot> {
        Snapshot::decode(&self.payload)
    }
}

/// Insertable row; `updated_at` takes the column default.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::snapshots)]
pub struct NewStoredSnapshot {
    storage_key: String,
    payload: String,
}
