//! Recursive copy primitive
//!
//! Mirrors a directory tree into another location. Used by the provisioner
//! and usable on its own.

use std::path::Path;

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{AssetMiniError, AssetMiniResult};

/// What a copy produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Directories created under the destination (excluding its root)
    pub directories: usize,
    /// Files copied
    pub files: usize,
}

/// Copy every entry of `src` under `dst`, keeping relative structure.
///
/// Traversal is pre-order: a directory is created before any of its
/// children are copied. Siblings are visited in file-name order. `dst` is
/// created if missing. The first failure aborts the copy; entries already
/// copied stay in place.
pub fn copy_tree<FS>(fs: &FS, src: &Path, dst: &Path) -> AssetMiniResult<CopyStats>
where
    FS: FileSystem + ?Sized,
{
    fs.create_dir_all(dst).map_err(|source| copy_error(dst, source))?;

    let mut stats = CopyStats::default();
    copy_dir_contents(fs, src, dst, &mut stats)?;

    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        directories = stats.directories,
        files = stats.files,
        "copied tree"
    );
    Ok(stats)
}

fn copy_dir_contents<FS>(
    fs: &FS,
    src_dir: &Path,
    dst_dir: &Path,
    stats: &mut CopyStats,
) -> AssetMiniResult<()>
where
    FS: FileSystem + ?Sized,
{
    let entries = fs
        .list_dir(src_dir)
        .map_err(|source| copy_error(src_dir, source))?;

    for entry in entries {
        // list_dir never yields `.`/`..`, so every entry has a file name
        let Some(name) = entry.file_name() else {
            continue;
        };
        let target = dst_dir.join(name);

        if fs.is_dir(&entry) {
            fs.create_dir_all(&target)
                .map_err(|source| copy_error(&target, source))?;
            stats.directories += 1;
            tracing::trace!(dir = %target.display(), "created directory");
            copy_dir_contents(fs, &entry, &target, stats)?;
        } else {
            fs.copy_file(&entry, &target)
                .map_err(|source| copy_error(&target, source))?;
            stats.files += 1;
            tracing::trace!(file = %target.display(), "copied file");
        }
    }

    Ok(())
}

fn copy_error(path: &Path, source: FsError) -> AssetMiniError {
    AssetMiniError::Copy {
        path: path.to_path_buf(),
        source,
    }
}
