//! Result handoff and history.
//!
//! Two small containers: a one-shot mailbox that passes a completed
//! reading from the draw to the results view (read-then-delete, so a
//! revisit finds nothing and must go home), and a capped most-recent-first
//! history that can persist as a JSON file.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assemble::{FortuneMode, FortuneRecord};
use crate::error::EngineResult;

/// One-shot, single-consumer mailbox keyed by mode.
///
/// `put` overwrites any unconsumed slot for the same mode; `take` removes
/// the slot as it reads it, so a second `take` yields `None`.
#[derive(Debug, Default)]
pub struct ResultMailbox {
    slots: HashMap<String, String>,
}

impl ResultMailbox {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a completed reading under its mode key.
    pub fn put(&mut self, record: &FortuneRecord) -> EngineResult<()> {
        let json = serde_json::to_string(record)?;
        self.slots.insert(record.mode().result_key(), json);
        Ok(())
    }

    /// Read and delete the slot for a mode.
    ///
    /// Returns `None` when the slot is empty or its contents are
    /// malformed; both are the caller's cue to redirect to the start view.
    pub fn take(&mut self, mode: FortuneMode) -> Option<FortuneRecord> {
        let json = self.slots.remove(&mode.result_key())?;
        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("discarding malformed stored result for {mode}: {e}");
                None
            }
        }
    }

    /// Whether a mode currently has an unconsumed result.
    pub fn has_result(&self, mode: FortuneMode) -> bool {
        self.slots.contains_key(&mode.result_key())
    }
}

/// Maximum number of history entries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// One saved reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Mode that produced the reading.
    pub mode: FortuneMode,
    /// The full reading.
    pub record: FortuneRecord,
    /// When the entry was saved.
    pub created_at: DateTime<Utc>,
}

/// A capped, most-recent-first list of past readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, truncating to [`HISTORY_CAPACITY`].
    ///
    /// The only eviction policy is this truncation: pushing an eleventh
    /// entry drops the oldest.
    pub fn push(&mut self, record: FortuneRecord, created_at: DateTime<Utc>) {
        self.entries.insert(
            0,
            HistoryEntry {
                mode: record.mode(),
                record,
                created_at,
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a history file; a missing file is an empty history.
    pub fn load(path: &Path) -> EngineResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the history to a JSON file.
    pub fn save(&self, path: &Path) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
