//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use assetmini::application::{CopyStats, EntryStatus, ProvisionOutcome, UpdateEntry};
use assetmini::config::Config;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Non-fatal warning (e.g. unknown config key).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }
}

/// Result of the install hook.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionEvent {
    pub event: &'static str,
    pub target: String,
    pub status: &'static str,
    pub files: usize,
    pub directories: usize,
}

impl ProvisionEvent {
    pub fn new(target: String, outcome: &ProvisionOutcome) -> Self {
        let stats = match outcome {
            ProvisionOutcome::Provisioned(stats) => *stats,
            ProvisionOutcome::AlreadyExists => CopyStats::default(),
        };
        Self {
            event: "provision",
            target,
            status: outcome.as_str(),
            files: stats.files,
            directories: stats.directories,
        }
    }
}

/// Per-file result of the update hook.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent {
    pub event: &'static str,
    pub file: String,
    pub path: String,
    pub status: &'static str,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileEvent {
    pub fn from_entry(entry: &UpdateEntry, dry_run: bool) -> Self {
        let (status, error) = match &entry.status {
            EntryStatus::Done(outcome) => (outcome.as_str(), None),
            EntryStatus::Failed { message } => ("error", Some(message.clone())),
        };
        Self {
            event: "file",
            file: entry.file.to_string(),
            path: entry.destination.display().to_string(),
            status,
            dry_run,
            before: entry.change.as_ref().map(|c| c.before_hash().to_string()),
            after: entry.change.as_ref().map(|c| c.after_hash().to_string()),
            error,
        }
    }
}

/// Answer to `supports`.
#[derive(Debug, Clone, Serialize)]
pub struct SupportsEvent<'a> {
    pub event: &'static str,
    pub package_type: &'a str,
    pub supported: bool,
}

impl<'a> SupportsEvent<'a> {
    pub fn new(package_type: &'a str, supported: bool) -> Self {
        Self {
            event: "supports",
            package_type,
            supported,
        }
    }
}

/// Resolved configuration dump.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEvent<'a> {
    pub event: &'static str,
    pub config: &'a Config,
    pub sources: Vec<String>,
}

impl<'a> ConfigEvent<'a> {
    pub fn new(config: &'a Config, sources: Vec<String>) -> Self {
        Self {
            event: "config",
            config,
            sources,
        }
    }
}
