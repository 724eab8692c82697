//! Provision result types

use crate::application::copy_tree::CopyStats;

/// What `provision` did with the target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Target was absent and has been populated from the skeleton
    Provisioned(CopyStats),
    /// Target already existed and was left untouched
    AlreadyExists,
}

impl ProvisionOutcome {
    pub fn is_provisioned(&self) -> bool {
        matches!(self, ProvisionOutcome::Provisioned(_))
    }

    /// Stable identifier used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvisionOutcome::Provisioned(_) => "provisioned",
            ProvisionOutcome::AlreadyExists => "already_exists",
        }
    }
}

impl std::fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionOutcome::Provisioned(stats) => write!(
                f,
                "provisioned ({} files, {} directories)",
                stats.files, stats.directories
            ),
            ProvisionOutcome::AlreadyExists => write!(f, "already exists"),
        }
    }
}
