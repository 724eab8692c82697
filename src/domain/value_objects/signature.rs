//! Ownership Signature Value Object
//!
//! A marker string embedded in every skeleton file the updater may later
//! overwrite. Finding it in a destination file is the only proof that the
//! installer created that file.

use std::fmt;

use crate::error::{AssetMiniError, AssetMiniResult};

/// Ownership signature
///
/// Matching is a plain byte substring search, so binary or non-UTF-8 files
/// are handled the same way as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnershipSignature(String);

impl OwnershipSignature {
    /// The signature shipped in the gears/assetmini skeleton
    pub const DEFAULT: &'static str = "<brad @=\"bjc.id.au\" />";

    /// Create a signature, rejecting the empty string
    pub fn new(value: impl Into<String>) -> AssetMiniResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AssetMiniError::EmptySignature);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the signature appears anywhere in `content`, offset 0 included
    pub fn is_found_in(&self, content: &[u8]) -> bool {
        let needle = self.0.as_bytes();
        if needle.len() > content.len() {
            return false;
        }
        content.windows(needle.len()).any(|window| window == needle)
    }
}

impl Default for OwnershipSignature {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for OwnershipSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
