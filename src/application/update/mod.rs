//! Update Use Case
//!
//! Refreshes managed files in the target directory from the skeleton.
//!
//! This module handles:
//! - Skipping managed files that are not present
//! - Verifying the ownership signature before overwriting
//! - Atomic replacement of owned files
//! - Collecting a per-file report where one failure never blocks the rest

mod options;
mod result;
mod use_case;


pub use options::UpdateOptions;
pub use result::{ContentChange, EntryStatus, UpdateEntry, UpdateOutcome, UpdateReport};
pub use use_case::{update_managed_file, UpdateUseCase};
