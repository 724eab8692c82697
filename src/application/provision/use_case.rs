//! Provision Use Case
//!
//! Creates the target directory and copies the skeleton into it.

use std::path::Path;

use crate::application::copy_tree::copy_tree;
use crate::domain::ports::FileSystem;
use crate::error::{AssetMiniError, AssetMiniResult};

use super::result::ProvisionOutcome;

/// Provision use case - one-shot skeleton copy on install
pub struct ProvisionUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ProvisionUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Populate `target` from `skeleton`.
    ///
    /// An existing `target` (file or directory, whatever its contents) is
    /// never touched. On failure the partially copied tree is left as is and
    /// the error names the path that failed.
    pub fn execute(&self, skeleton: &Path, target: &Path) -> AssetMiniResult<ProvisionOutcome> {
        if self.fs.exists(target) {
            tracing::info!(
                target = %target.display(),
                "target directory already exists, skipping provisioning"
            );
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        if !self.fs.is_dir(skeleton) {
            return Err(AssetMiniError::SkeletonNotFound {
                path: skeleton.to_path_buf(),
            });
        }

        self.fs
            .create_dir_all(target)
            .map_err(|source| AssetMiniError::Provision {
                path: target.to_path_buf(),
                source,
            })?;

        let stats = copy_tree(&self.fs, skeleton, target).map_err(|err| match err {
            AssetMiniError::Copy { path, source } => AssetMiniError::Provision { path, source },
            other => other,
        })?;

        tracing::info!(
            skeleton = %skeleton.display(),
            target = %target.display(),
            files = stats.files,
            directories = stats.directories,
            "provisioned target directory"
        );
        Ok(ProvisionOutcome::Provisioned(stats))
    }
}

/// Shorthand for `ProvisionUseCase::new(fs).execute(skeleton, target)`
pub fn provision<FS>(fs: FS, skeleton: &Path, target: &Path) -> AssetMiniResult<ProvisionOutcome>
where
    FS: FileSystem,
{
    ProvisionUseCase::new(fs).execute(skeleton, target)
}
