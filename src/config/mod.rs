//! Configuration module for AssetMini
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETMINI_*)
//! 3. composer.json (`extra.assetmini-dir`, `config.vendor-dir`)
//! 4. Project config (assetmini.toml)
//! 5. User config (<config_dir>/assetmini/config.toml)
//! 6. Built-in defaults (lowest priority)

mod composer;
mod loader;
mod types;

pub use composer::{apply_overrides as apply_composer_overrides, COMPOSER_JSON, TARGET_DIR_KEY};
pub use loader::{
    load_with_warnings, resolve, user_config_path, with_env_overrides, with_overrides_from,
    ConfigWarning, ResolvedConfig, PROJECT_CONFIG_FILE, USER_CONFIG_VAR,
};
pub use types::{Config, InstallerConfig};
