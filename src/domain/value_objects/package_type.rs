//! Package type identifier the installer answers for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host package type, e.g. `gears-assetmini`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageType(String);

impl PackageType {
    pub const DEFAULT: &'static str = "gears-assetmini";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison
    pub fn supports(&self, package_type: &str) -> bool {
        self.0 == package_type
    }
}

impl Default for PackageType {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
