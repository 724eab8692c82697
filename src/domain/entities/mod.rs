//! Domain Entities

mod managed_file;
mod package;

pub use managed_file::{default_managed_files, ManagedFile, DEFAULT_MANAGED_FILES};
pub use package::{PackageFields, PROTECTED_FIELDS};
