//! Domain Layer
//!
//! Pure types and rules of the installer, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Managed files and package metadata
//! - `value_objects/` - Immutable value types (OwnershipSignature, PackageType, ContentHash)
//! - `ports/` - Interface definitions for infrastructure (FileSystem)
//!
//! All file access goes through the `FileSystem` port so the use cases in
//! `application` can run against any implementation.

pub mod entities;
pub mod ports;
pub mod value_objects;
