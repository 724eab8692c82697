//! composer.json overlay
//!
//! Reads the two settings a consuming project can put in its manifest:
//!
//! ```json
//! {
//!     "config": { "vendor-dir": "lib/vendor" },
//!     "extra": { "assetmini-dir": "public/assets" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AssetMiniError, AssetMiniResult};

use super::types::Config;

pub const COMPOSER_JSON: &str = "composer.json";

/// Key under `extra` naming a custom target directory
pub const TARGET_DIR_KEY: &str = "assetmini-dir";

/// Apply manifest settings to `config`.
///
/// Returns `Ok(false)` when there is no manifest. Sections that are not JSON
/// objects (composer writes an empty `extra` as `[]`) are ignored.
pub fn apply_overrides(config: &mut Config, composer_json: &Path) -> AssetMiniResult<bool> {
    if !composer_json.is_file() {
        return Ok(false);
    }

    let content = fs::read_to_string(composer_json)?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|e| AssetMiniError::InvalidConfig {
            file: composer_json.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(dir) = string_at(&manifest, "extra", TARGET_DIR_KEY) {
        config.installer.target_dir = PathBuf::from(dir);
    }
    if let Some(dir) = string_at(&manifest, "config", "vendor-dir") {
        config.installer.vendor_dir = PathBuf::from(dir);
    }

    Ok(true)
}

fn string_at<'a>(manifest: &'a Value, section: &str, key: &str) -> Option<&'a str> {
    manifest
        .get(section)?
        .as_object()?
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
