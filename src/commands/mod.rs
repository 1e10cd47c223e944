//! CLI command handlers
//!
//! Each handler takes already-parsed arguments plus the loaded settings and
//! returns a serializable report; `main` prints it.

pub mod defaults;
pub mod matching;
pub mod replay;

use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
