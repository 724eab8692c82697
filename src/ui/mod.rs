//! Presentation helpers for the CLI: terminal detection, diff rendering and
//! NDJSON events.

pub mod diff;
pub mod json;
pub mod terminal;
