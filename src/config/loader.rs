//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetMiniError, AssetMiniResult};

use super::composer;
use super::types::Config;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "assetmini.toml";

/// Overrides the user config location (used by tests)
pub const USER_CONFIG_VAR: &str = "ASSETMINI_USER_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration after all layers were applied
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub config: Config,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetMiniResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetMiniError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|unknown| {
            let (section, key) = match unknown.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, unknown.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: locate_key(&content, section, key),
                suggestion: closest_key(key, known_keys(section)),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a project.
///
/// Precedence (highest first): environment, composer.json, project
/// `assetmini.toml`, user config, defaults. The first config file found
/// (project, then user) is used as the base. CLI flags are applied by the
/// caller on top of the result.
pub fn resolve(project_root: &Path) -> AssetMiniResult<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let base = if project_config.is_file() {
        Some(project_config)
    } else {
        user_config_path().filter(|p| p.is_file())
    };

    if let Some(path) = base {
        let (config, warnings) = load_with_warnings(&path)?;
        tracing::debug!(config = %path.display(), "loaded configuration file");
        resolved.config = config;
        resolved.warnings = warnings;
        resolved.sources.push(path);
    }

    let composer_json = project_root.join(composer::COMPOSER_JSON);
    if composer::apply_overrides(&mut resolved.config, &composer_json)? {
        resolved.sources.push(composer_json);
    }

    resolved.config = with_env_overrides(resolved.config);
    Ok(resolved)
}

/// Apply environment variable overrides (ASSETMINI_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides using an arbitrary variable lookup
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ASSETMINI_DIR
    if let Some(dir) = lookup("ASSETMINI_DIR").filter(|v| !v.trim().is_empty()) {
        config.installer.target_dir = PathBuf::from(dir.trim());
    }

    // ASSETMINI_VENDOR_DIR
    if let Some(dir) = lookup("ASSETMINI_VENDOR_DIR").filter(|v| !v.trim().is_empty()) {
        config.installer.vendor_dir = PathBuf::from(dir.trim());
    }

    // ASSETMINI_SIGNATURE
    if let Some(signature) = lookup("ASSETMINI_SIGNATURE").filter(|v| !v.is_empty()) {
        config.installer.signature = signature;
    }

    // ASSETMINI_MANAGED_FILES (comma-separated)
    if let Some(files) = lookup("ASSETMINI_MANAGED_FILES") {
        let parsed: Vec<String> = files
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.installer.managed_files = parsed;
        }
    }

    config
}

/// User-level config: `$ASSETMINI_USER_CONFIG`, else `<config_dir>/assetmini/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(USER_CONFIG_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("assetmini").join("config.toml"))
}

/// Keys accepted at the top level of a config file
const TOP_LEVEL_KEYS: &[&str] = &["installer"];

/// Keys accepted inside `[installer]`
const INSTALLER_KEYS: &[&str] = &[
    "target_dir",
    "skeleton_dir",
    "vendor_dir",
    "package_name",
    "package_type",
    "signature",
    "managed_files",
];

fn known_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => TOP_LEVEL_KEYS,
        Some("installer") => INSTALLER_KEYS,
        Some(_) => &[],
    }
}

/// 1-based line declaring `key` (or the `[key]` table) within `section`.
fn locate_key(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim_start();

        if let Some(header) = line.strip_prefix('[') {
            let name = header.split(']').next().unwrap_or_default().trim();
            if section.is_none() && name == key {
                return Some(index + 1);
            }
            current = Some(name);
            continue;
        }

        if current == section {
            let declared = line.split('=').next().unwrap_or_default().trim();
            if declared == key || declared.trim_matches('"') == key {
                return Some(index + 1);
            }
        }
    }

    None
}

/// Nearest known key within two edits, ties going to the first listed.
fn closest_key(unknown: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over chars, keeping a single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
