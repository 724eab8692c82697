//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and the per-target advisory lock

pub mod fs;

pub use fs::{LocalFs, TargetLock};
