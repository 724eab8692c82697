//! Managed File Entity
//!
//! A file inside the target directory that the updater is allowed to
//! refresh from the skeleton. Both sides share the same relative name.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{AssetMiniError, AssetMiniResult};

/// Names refreshed on update when no configuration overrides them
pub const DEFAULT_MANAGED_FILES: [&str; 2] = ["min.php", ".htaccess"];

/// A file the updater may overwrite
///
/// The name is validated to be a non-empty relative path made only of normal
/// components, so it can never point outside the skeleton or target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagedFile {
    name: PathBuf,
}

impl ManagedFile {
    pub fn new(name: impl AsRef<Path>) -> AssetMiniResult<Self> {
        let name = name.as_ref();
        let invalid = || AssetMiniError::InvalidManagedFile {
            name: name.display().to_string(),
        };

        let mut normal_components = 0;
        for component in name.components() {
            match component {
                Component::Normal(_) => normal_components += 1,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid());
                }
            }
        }
        if normal_components == 0 {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_path_buf(),
        })
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Source of the refreshed content: `<skeleton>/<name>`
    pub fn skeleton_path(&self, skeleton: &Path) -> PathBuf {
        skeleton.join(&self.name)
    }

    /// File being refreshed: `<target>/<name>`
    pub fn destination_path(&self, target: &Path) -> PathBuf {
        target.join(&self.name)
    }
}

impl fmt::Display for ManagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.display())
    }
}

/// `min.php` and `.htaccess`
pub fn default_managed_files() -> Vec<ManagedFile> {
    DEFAULT_MANAGED_FILES
        .iter()
        .map(|name| ManagedFile {
            name: PathBuf::from(name),
        })
        .collect()
}
