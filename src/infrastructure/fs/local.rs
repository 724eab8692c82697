//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination's directory followed by a
/// rename, so readers see either the old or the new content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(tmp.path(), e))?;

        // Temp files are created owner-only; keep the replaced file's mode.
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FsError::from_io(path, e))?;
        }

        tmp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut source = fs::File::open(from).map_err(|e| FsError::from_io(from, e))?;
        let mut dest = fs::File::create(to).map_err(|e| FsError::from_io(to, e))?;
        std::io::copy(&mut source, &mut dest).map_err(|e| FsError::from_io(to, e))?;
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut entries = fs::read_dir(path)
            .map_err(|e| FsError::from_io(path, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FsError::from_io(path, e))?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }
}
