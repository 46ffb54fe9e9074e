// src/output/writer.rs

//! Writes a rendered document to its destination file.

use crate::errors::{io_error_with_path, Result};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `text` to `path` as UTF-8, replacing any existing file.
///
/// The text goes to a temporary file in the same directory first, which is
/// renamed over `path` once fully written. On any failure the temporary file
/// is removed and `path` is left as it was.
///
/// # Errors
/// `Error::Io` naming `path` if the file cannot be created, written or moved
/// into place.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(|e| io_error_with_path(e, path))?;

    let mut writer = BufWriter::new(temp);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| io_error_with_path(e, path))?;
    let temp = writer
        .into_inner()
        .map_err(|e| io_error_with_path(e.into_error(), path))?;

    temp.persist(path)
        .map_err(|e| io_error_with_path(e.error, path))?;
    log::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
