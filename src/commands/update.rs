//! Update command - refresh owned managed files from the skeleton

use std::path::Path;

use anyhow::{bail, Context, Result};

use assetmini::application::{EntryStatus, UpdateReport};
use assetmini::{UpdateOptions, UpdateOutcome};

use crate::cli::PathArgs;
use crate::ui::diff::render_content_diff;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, FileEvent, StartEvent};
use crate::ui::terminal::stdout_supports_color;

pub fn cmd_update(
    project: &Path,
    paths: &PathArgs,
    dry_run: bool,
    lock: bool,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("update"))?;
    }

    let (installer, _) = super::load_installer(project, paths.target.as_deref(), json)?;
    let package_root = paths
        .package_root
        .clone()
        .unwrap_or_else(|| installer.default_package_root());
    let options = UpdateOptions::new().with_dry_run(dry_run).with_lock(lock);

    let report = match installer.update(&package_root, &options) {
        Ok(report) => report,
        Err(err) => {
            if json {
                emit_event(&ErrorEvent::new("update", err.to_string()))?;
                emit_event(&CompleteEvent::failure("update"))?;
            }
            return Err(err).context("update failed");
        }
    };

    if json {
        for entry in &report.entries {
            emit_event(&FileEvent::from_entry(entry, report.dry_run))?;
        }
        let complete = if report.is_success() {
            CompleteEvent::success("update")
        } else {
            CompleteEvent::failure("update")
        };
        emit_event(&complete)?;
    } else {
        print_report(&report);
    }

    let failed = report.failed().count();
    if failed > 0 {
        bail!("{} managed file(s) could not be updated", failed);
    }
    Ok(())
}

fn print_report(report: &UpdateReport) {
    let color = stdout_supports_color();

    for entry in &report.entries {
        let path = entry.destination.display();
        match &entry.status {
            EntryStatus::Done(UpdateOutcome::Updated) => {
                let unchanged = entry.change.as_ref().is_some_and(|c| c.is_unchanged());
                let verb = if report.dry_run { "Would update" } else { "Updated" };
                if unchanged {
                    println!("✓ {} {} (already current)", verb, path);
                } else {
                    println!("✓ {} {}", verb, path);
                }
                if report.dry_run && !unchanged {
                    if let Some(change) = &entry.change {
                        print!(
                            "{}",
                            render_content_diff(
                                &entry.file.to_string(),
                                &change.before,
                                &change.after,
                                color
                            )
                        );
                    }
                }
            }
            EntryStatus::Done(UpdateOutcome::SkippedNotPresent) => {
                println!("• Skipped {} (not present)", path);
            }
            EntryStatus::Done(UpdateOutcome::SkippedNotOwned) => {
                println!("• Skipped {} (no ownership signature, left untouched)", path);
            }
            EntryStatus::Failed { message } => {
                println!("✗ Failed {}: {}", path, message);
            }
        }
    }
}
