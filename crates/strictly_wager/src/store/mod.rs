//! Persistence gateway for balances and history.
//!
//! The table only needs `load` and `save` of a [`Snapshot`]. Adapters:
//! in-memory, a JSON file, and a SQLite key-value table.

mod error;
mod gateway;
mod json_file;
mod memory;
mod models;
mod schema; // Diesel schema - internal use only
mod sqlite;

pub use error::StoreError;
pub use gateway::{Snapshot, SnapshotStore};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{NewStoredSnapshot, StoredSnapshot};
pub use sqlite::SqliteStore;
