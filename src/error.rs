//! Error types for AssetMini
//!
//! Uses `thiserror` for library errors; the CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for AssetMini operations
pub type AssetMiniResult<T> = Result<T, AssetMiniError>;

/// Main error type for AssetMini operations
#[derive(Error, Debug)]
pub enum AssetMiniError {
    /// Target directory could not be created or populated on install
    #[error("failed to provision {path}: {source}")]
    Provision {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Recursive copy failed on an entry
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A managed file could not be read or replaced
    #[error("failed to update {path}: {source}")]
    Update {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Skeleton directory missing from the installed package
    #[error("skeleton directory not found: {path}")]
    SkeletonNotFound { path: PathBuf },

    /// Managed file name is absolute or escapes the target directory
    #[error("invalid managed file '{name}': must be a relative path inside the target directory")]
    InvalidManagedFile { name: String },

    /// Ownership signature must contain at least one byte
    #[error("ownership signature must not be empty")]
    EmptySignature,

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Exclusive lock on the target directory could not be acquired
    #[error("failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetMiniError {
    /// Path most relevant to this error, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AssetMiniError::Provision { path, .. }
            | AssetMiniError::Copy { path, .. }
            | AssetMiniError::Update { path, .. }
            | AssetMiniError::SkeletonNotFound { path }
            | AssetMiniError::InvalidConfig { file: path, .. }
            | AssetMiniError::Lock { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
