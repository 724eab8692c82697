//! CLI command implementations

pub mod config;
pub mod install;
pub mod supports;
pub mod update;

use std::path::Path;

use anyhow::{Context, Result};

use assetmini::config::{self as cfg, ResolvedConfig};
use assetmini::{Installer, InstallerSettings, LocalFs};

use crate::ui::json::{emit_event, events::WarningEvent};

/// Resolve configuration for `project`, apply the `--target` flag and build
/// the installer. Config warnings are reported here.
pub fn load_installer(
    project: &Path,
    target: Option<&Path>,
    json: bool,
) -> Result<(Installer<LocalFs>, ResolvedConfig)> {
    let mut resolved = cfg::resolve(project)
        .with_context(|| format!("failed to load configuration for {}", project.display()))?;

    if let Some(target) = target {
        resolved.config.installer.target_dir = target.to_path_buf();
    }

    report_warnings(&resolved, json)?;

    let settings = InstallerSettings::from_config(&resolved.config.installer)
        .context("invalid installer configuration")?;
    Ok((Installer::new(LocalFs::new(), project, settings), resolved))
}

fn report_warnings(resolved: &ResolvedConfig, json: bool) -> Result<()> {
    for warning in &resolved.warnings {
        if json {
            emit_event(&WarningEvent::new(warning.to_string()))?;
        } else {
            eprintln!("⚠ {}", warning);
        }
    }
    Ok(())
}
