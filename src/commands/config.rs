//! Config command - show the resolved configuration

use std::path::Path;

use anyhow::{Context, Result};

use crate::ui::json::emit_event;
use crate::ui::json::events::ConfigEvent;

pub fn cmd_config(project: &Path, json: bool) -> Result<()> {
    let (_, resolved) = super::load_installer(project, None, json)?;
    let sources: Vec<String> = resolved
        .sources
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    if json {
        emit_event(&ConfigEvent::new(&resolved.config, sources))?;
        return Ok(());
    }

    if sources.is_empty() {
        println!("# sources: built-in defaults");
    } else {
        println!("# sources: {}", sources.join(", "));
    }
    print!(
        "{}",
        resolved
            .config
            .to_toml()
            .context("failed to render configuration")?
    );
    Ok(())
}
