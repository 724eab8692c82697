//! Update result types

use std::path::PathBuf;

use crate::domain::entities::ManagedFile;
use crate::domain::value_objects::ContentHash;

/// Outcome of refreshing one managed file
///
/// Skips are expected behavior, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Destination was owned and now matches the skeleton
    Updated,
    /// Destination does not exist; nothing was created
    SkippedNotPresent,
    /// Destination lacks the ownership signature; left untouched
    SkippedNotOwned,
}

impl UpdateOutcome {
    pub fn is_skip(&self) -> bool {
        !matches!(self, UpdateOutcome::Updated)
    }

    /// Stable identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOutcome::Updated => "updated",
            UpdateOutcome::SkippedNotPresent => "not_present",
            UpdateOutcome::SkippedNotOwned => "not_owned",
        }
    }
}

impl std::fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateOutcome::Updated => write!(f, "updated"),
            UpdateOutcome::SkippedNotPresent => write!(f, "not present"),
            UpdateOutcome::SkippedNotOwned => write!(f, "not owned"),
        }
    }
}

/// Old and new bytes of an owned destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    pub before: Vec<u8>,
    pub after: Vec<u8>,
}

impl ContentChange {
    pub fn before_hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.before)
    }

    pub fn after_hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.after)
    }

    /// Skeleton and destination were already identical
    pub fn is_unchanged(&self) -> bool {
        self.before == self.after
    }
}

/// Status of one entry in an update run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Done(UpdateOutcome),
    Failed { message: String },
}

/// One managed file processed during an update
#[derive(Debug, Clone)]
pub struct UpdateEntry {
    pub file: ManagedFile,
    pub destination: PathBuf,
    pub status: EntryStatus,
    /// Present for owned files (written or, in dry run, would be written)
    pub change: Option<ContentChange>,
}

impl UpdateEntry {
    pub fn outcome(&self) -> Option<UpdateOutcome> {
        match self.status {
            EntryStatus::Done(outcome) => Some(outcome),
            EntryStatus::Failed { .. } => None,
        }
    }
}

/// Result of an update run over all managed files
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub target: PathBuf,
    pub dry_run: bool,
    pub entries: Vec<UpdateEntry>,
}

impl UpdateReport {
    pub fn new(target: PathBuf, dry_run: bool) -> Self {
        Self {
            target,
            dry_run,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: UpdateEntry) {
        self.entries.push(entry);
    }

    /// Entries that were (or in dry run would be) overwritten
    pub fn updated(&self) -> impl Iterator<Item = &UpdateEntry> {
        self.entries
            .iter()
            .filter(|e| e.outcome() == Some(UpdateOutcome::Updated))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &UpdateEntry> {
        self.entries
            .iter()
            .filter(|e| e.outcome().is_some_and(|o| o.is_skip()))
    }

    pub fn failed(&self) -> impl Iterator<Item = &UpdateEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, EntryStatus::Failed { .. }))
    }

    /// Check if every entry completed without error
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}
