//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
mod lock;

pub use local::LocalFs;
pub use lock::{lock_path_for, TargetLock};
