//! SQLite-backed snapshot store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::store::{NewStoredSnapshot, Snapshot, SnapshotStore, StoreError, StoredSnapshot, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key-value table of snapshots in a SQLite file.
///
/// Each table instance reads and writes the row under its storage key.
/// Every call opens its own connection, so `":memory:"` does not persist
/// between calls; use a file path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
    storage_key: String,
}

impl SqliteStore {
    /// Opens the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path, storage_key), fields(db_path = %db_path, storage_key = %storage_key))]
    pub fn open(db_path: String, storage_key: String) -> Result<Self, StoreError> {
        info!("Opening SqliteStore");
        let store = Self {
            db_path,
            storage_key,
        };
        let mut conn = store.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Failed to run migrations: {}", e)))?;
        Ok(store)
    }

    /// Storage key this store reads and writes.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Loads the raw row for this store's key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self), fields(storage_key = %self.storage_key))]
    pub fn load_row(&self) -> Result<Option<StoredSnapshot>, StoreError> {
        let mut conn = self.connection()?;
        let row = schema::snapshots::table
            .find(self.storage_key.as_str())
            .select(StoredSnapshot::as_select())
            .first(&mut conn)
            .optional()?;
        debug!(found = row.is_some(), "Snapshot row lookup");
        Ok(row)
    }
}

impl SnapshotStore for SqliteStore {
    #[instrument(skip(self), fields(storage_key = %self.storage_key))]
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.load_row()?.and_then(|row| row.decode()))
    }

    #[instrument(skip(self, snapshot), fields(storage_key = %self.storage_key))]
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let row = NewStoredSnapshot::new(self.storage_key.clone(), snapshot.encode()?);
        diesel::replace_into(schema::snapshots::table)
            .values(&row)
            .execute(&mut conn)?;
        debug!("Snapshot row replaced");
        Ok(())
    }
}
