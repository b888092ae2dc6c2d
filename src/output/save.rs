//! Result persistence.
//!
//! The file is created (or truncated) at save time and closed as soon as the
//! write completes. There is no temp-file-then-rename step; an interrupted
//! write may leave a partial file, which is acceptable for this tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes hostnames to `path`, one per line.
///
/// # Errors
///
/// Returns an error on any filesystem failure (invalid path, permission
/// denied, disk full). The caller reports the error and continues; a save
/// failure is never fatal.
pub fn save_names(path: &Path, names: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for name in names {
        writeln!(writer, "{name}")
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// Writes `value` to `path` as indented JSON.
///
/// Used for the raw crt.sh response when `--subdomains` was not requested.
///
/// # Errors
///
/// Returns an error on filesystem failure or if serialization fails; the
/// caller reports it and continues.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
