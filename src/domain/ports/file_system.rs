//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the provisioning and update use cases to perform file
//! operations without depending on a concrete implementation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
///
/// Every variant carries the path the operation was acting on.
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while operating on `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path this error refers to
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic replacement
pub trait FileSystem {
    /// Read the full contents of a file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Replace the file contents atomically (temp file + rename)
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy file bytes from `from` to `to`, overwriting `to`
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// List the entries of a directory, sorted by file name
    ///
    /// The `.` and `..` pseudo-entries are never returned.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;
}
