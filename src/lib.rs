//! AssetMini - skeleton provisioner and signature-gated updater
//!
//! Installer support for `gears-assetmini` packages. On install the skeleton
//! bundled with the package is copied into the project's assets directory
//! (only if that directory does not exist yet). On update, a small set of
//! managed files is refreshed from the skeleton, but only when the existing
//! file still carries the installer's ownership signature.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    copy_tree, provision, update_managed_file, CopyStats, Installer, InstallerSettings,
    ProvisionOutcome, UpdateOptions, UpdateOutcome, UpdateReport,
};
pub use config::{Config, InstallerConfig};
pub use domain::entities::{ManagedFile, PackageFields};
pub use domain::value_objects::{OwnershipSignature, PackageType};
pub use error::{AssetMiniError, AssetMiniResult};
pub use infrastructure::LocalFs;
