//! Install command - provision the target directory from the skeleton

use std::path::Path;

use anyhow::{Context, Result};

use assetmini::ProvisionOutcome;

use crate::cli::PathArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, ProvisionEvent, StartEvent};

pub fn cmd_install(project: &Path, paths: &PathArgs, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("install"))?;
    }

    let (installer, _) = super::load_installer(project, paths.target.as_deref(), json)?;
    let package_root = paths
        .package_root
        .clone()
        .unwrap_or_else(|| installer.default_package_root());
    let target = installer.target_dir();

    match installer.install(&package_root) {
        Ok(outcome) => {
            if json {
                emit_event(&ProvisionEvent::new(target.display().to_string(), &outcome))?;
                emit_event(&CompleteEvent::success("install"))?;
            } else {
                match outcome {
                    ProvisionOutcome::Provisioned(stats) => println!(
                        "✓ Provisioned {} ({} files, {} directories)",
                        target.display(),
                        stats.files,
                        stats.directories
                    ),
                    ProvisionOutcome::AlreadyExists => println!(
                        "• {} already exists, leaving it untouched",
                        target.display()
                    ),
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let mut event = ErrorEvent::new("install", err.to_string());
                if let Some(path) = err.path() {
                    event = event.with_path(path.display().to_string());
                }
                emit_event(&event)?;
                emit_event(&CompleteEvent::failure("install"))?;
            }
            Err(err).with_context(|| format!("failed to install into {}", target.display()))
        }
    }
}
