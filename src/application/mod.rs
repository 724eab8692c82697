//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProvisionUseCase` - First-install copy of the skeleton into the target directory
//! - `UpdateUseCase` - Signature-gated refresh of managed files
//! - `copy_tree` - Recursive copy primitive shared by provisioning
//! - `Installer` - Host-facing adapter (supports / install / update)

pub mod copy_tree;
pub mod installer;
pub mod provision;
pub mod update;

pub use copy_tree::{copy_tree, CopyStats};
pub use installer::{Installer, InstallerSettings};
pub use provision::{provision, ProvisionOutcome, ProvisionUseCase};
pub use update::{
    update_managed_file, ContentChange, EntryStatus, UpdateEntry, UpdateOptions, UpdateOutcome,
    UpdateReport, UpdateUseCase,
};
