//! Shift history tracking.
//!
//! A transmission keeps no history of its own. Callers that want one feed
//! the records returned by [`Transmission::execute`](super::Transmission::execute)
//! into a [`ShiftHistory`].

use super::command::Command;
use super::gear::Gear;
use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Speed and gear at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reading {
    pub speed: i32,
    pub gear: Gear,
}

/// Record of a single command and its outcome.
///
/// `from == to` whenever the command was rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The command that was attempted
    pub command: Command,
    /// Reading before the command
    pub from: Reading,
    /// Reading after the command
    pub to: Reading,
    /// Status left behind by the command
    pub status: Status,
    /// When the command was applied
    pub timestamp: DateTime<Utc>,
}

impl ShiftRecord {
    pub fn was_applied(&self) -> bool {
        !self.status.is_rejection()
    }
}

/// Ordered history of executed commands.
///
/// History is immutable - `record` returns a new history with the record
/// appended.
///
/// # Example
///
/// ```rust
/// use gearbox::{Command, ShiftHistory, Transmission};
///
/// let mut transmission = Transmission::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
/// let history = ShiftHistory::new()
///     .record(transmission.execute(Command::IncreaseSpeed))
///     .record(transmission.execute(Command::IncreaseSpeed));
///
/// assert_eq!(history.records().len(), 2);
/// assert_eq!(history.rejections().count(), 1);
/// assert_eq!(history.path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftHistory {
    records: Vec<ShiftRecord>,
}

impl ShiftHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, record: ShiftRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Readings visited: the starting reading, then the reading after
    /// each applied command. Rejected commands add nothing.
    pub fn path(&self) -> Vec<Reading> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(
            self.records
                .iter()
                .filter(|record| record.was_applied())
                .map(|record| record.to),
        );
        path
    }

    /// Records of commands that were not applied.
    pub fn rejections(&self) -> impl Iterator<Item = &ShiftRecord> {
        self.records.iter().filter(|record| !record.was_applied())
    }

    /// Time from the first to the last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
