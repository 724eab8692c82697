//! Supports command - package type predicate

use std::path::Path;

use anyhow::Result;

use crate::ui::json::emit_event;
use crate::ui::json::events::SupportsEvent;

/// Print whether `package_type` is handled; the caller maps `false` to exit 1
pub fn cmd_supports(project: &Path, package_type: &str, json: bool) -> Result<bool> {
    let (installer, _) = super::load_installer(project, None, json)?;
    let supported = installer.supports(package_type);

    if json {
        emit_event(&SupportsEvent::new(package_type, supported))?;
    } else {
        println!("{}", supported);
    }
    Ok(supported)
}
