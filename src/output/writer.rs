// src/output/writer.rs

//! Writes rendered pages to their destination on disk.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `page` to `destination`, creating missing parent directories.
///
/// # Errors
/// Returns `Error::Io` carrying the offending path if a directory cannot be
/// created or the file cannot be written.
pub fn write_page(destination: &Path, page: &str) -> Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }
    let file = File::create(destination).map_err(|e| io_error_with_path(e, destination))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(page.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, destination))?;
    debug!("Wrote {} bytes to {}", page.len(), destination.display());
    Ok(())
}
