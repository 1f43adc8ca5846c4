//! Session log
//!
//! An append-only sequence of timestamped messages covering everything
//! that happened in the editing session: loads, edits, rejected
//! operations, and runner output. Displayed newest-first; not persisted
//! beyond the running session.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Display format for log timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log line
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// When the message was appended
    pub timestamp: DateTime<Local>,

    /// The message text
    pub message: String,
}

impl LogEntry {
    /// The timestamp rendered in the display format
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only session log
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, stamped now
    pub fn append(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, "session log");
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            message,
        });
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries in display order, newest first
    pub fn entries_newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<&str> {
        self.entries.last().map(|e| e.message.as_str())
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been appended
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
