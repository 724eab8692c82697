//! JSON output utilities for CLI commands.
//!
//! Every command in `--json` mode writes NDJSON (one object per line) to
//! stdout using the typed events in `events`.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a single typed event as one NDJSON line.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
