//! Advisory lock guarding a target directory
//!
//! The update sequence reads a file, checks the signature and then replaces
//! it. Callers running that concurrently against the same target hold this
//! lock for the whole sequence.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{AssetMiniError, AssetMiniResult};

/// Lock file used for `target`: a `.lock` sibling (`assets` -> `assets.lock`)
pub fn lock_path_for(target: &Path) -> PathBuf {
    let trimmed: PathBuf = target.components().collect();
    match trimmed.file_name() {
        Some(name) => {
            let mut lock_name = name.to_os_string();
            lock_name.push(".lock");
            trimmed.with_file_name(lock_name)
        }
        None => trimmed.join(".assetmini.lock"),
    }
}

/// Exclusive lock held until dropped
#[derive(Debug)]
pub struct TargetLock {
    file: fs::File,
    path: PathBuf,
}

impl TargetLock {
    /// Block until the exclusive lock for `target` is acquired
    pub fn acquire(target: &Path) -> AssetMiniResult<Self> {
        let path = lock_path_for(target);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AssetMiniError::Lock {
                path: path.clone(),
                source,
            })?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| AssetMiniError::Lock {
                path: path.clone(),
                source,
            })?;
        file.lock_exclusive()
            .map_err(|source| AssetMiniError::Lock {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(lock = %path.display(), "acquired target lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TargetLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
