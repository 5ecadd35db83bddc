//! Append-only table history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One history entry. The sequence number is its position in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct EventRecord {
    sequence: u64,
    message: String,
}

/// Ordered history; stored oldest first, displayed newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from stored messages (oldest first).
    #[instrument(skip(messages), fields(count = messages.len()))]
    pub fn from_messages(messages: Vec<String>) -> Self {
        let records = messages
            .into_iter()
            .enumerate()
            .map(|(i, message)| EventRecord::new(i as u64, message))
            .collect();
        Self { records }
    }

    /// Appends a message and returns its record.
    pub fn append(&mut self, message: impl Into<String>) -> &EventRecord {
        let record = EventRecord::new(self.records.len() as u64, message.into());
        debug!(sequence = record.sequence, message = %record.message, "History appended");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Records newest first, for display.
    pub fn newest_first(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter().rev()
    }

    /// Messages in append order, for persistence.
    pub fn messages(&self) -> Vec<String> {
        self.records.iter().map(|r| r.message.clone()).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was logged yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
