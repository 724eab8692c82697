//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod package_type;
mod signature;

pub use hash::ContentHash;
pub use package_type::PackageType;
pub use signature::OwnershipSignature;
