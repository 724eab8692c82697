//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_MANAGED_FILES;
use crate::domain::value_objects::{OwnershipSignature, PackageType};
use crate::error::{AssetMiniError, AssetMiniResult};

use super::loader::{self, ConfigWarning};

/// Installer configuration
///
/// ```toml
/// [installer]
/// target_dir = "public/assets"
/// managed_files = ["min.php", ".htaccess"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// Directory provisioned in the consuming project, relative to its root
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// Skeleton location inside the installed package
    #[serde(default = "default_skeleton_dir")]
    pub skeleton_dir: PathBuf,

    #[serde(default = "default_vendor_dir")]
    pub vendor_dir: PathBuf,

    #[serde(default = "default_package_name")]
    pub package_name: String,

    #[serde(default)]
    pub package_type: PackageType,

    #[serde(default = "default_signature")]
    pub signature: String,

    /// Files the updater may refresh, relative to the target directory
    #[serde(default = "default_managed_files")]
    pub managed_files: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            skeleton_dir: default_skeleton_dir(),
            vendor_dir: default_vendor_dir(),
            package_name: default_package_name(),
            package_type: PackageType::default(),
            signature: default_signature(),
            managed_files: default_managed_files(),
        }
    }
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_skeleton_dir() -> PathBuf {
    PathBuf::from("skel")
}

fn default_vendor_dir() -> PathBuf {
    PathBuf::from("vendor")
}

fn default_package_name() -> String {
    "gears/assetmini".to_string()
}

fn default_signature() -> String {
    OwnershipSignature::DEFAULT.to_string()
}

fn default_managed_files() -> Vec<String> {
    DEFAULT_MANAGED_FILES.iter().map(|s| s.to_string()).collect()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub installer: InstallerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetMiniResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> AssetMiniResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> AssetMiniResult<String> {
        toml::to_string_pretty(self).map_err(|e| AssetMiniError::InvalidConfig {
            file: PathBuf::from("<resolved>"),
            message: e.to_string(),
        })
    }
}
