//! Safe file reading with per-file error accounting.
//!
//! Reading a file never fails the run. Every problem is recorded as a
//! message in [`ConversionStats::errors`] and turned into a [`FileContent`]
//! variant, which a converter later renders as a placeholder in the style it
//! prefers.

mod encoding;

pub use encoding::{decode_text, TextEncoding};

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Counters and error log of one conversion pass.
///
/// `processed_files + skipped_files` always equals the number of files the
/// pass was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Files that produced a record, including placeholder records.
    pub processed_files: usize,
    /// Files that vanished before they could be read.
    pub skipped_files: usize,
    /// One message per problem encountered, in processing order.
    pub errors: Vec<String>,
}

/// What reading one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Successfully decoded text.
    Text(String),
    /// The file exceeds the size cap; its content was not read.
    TooLarge {
        /// Size on disk in bytes.
        size: u64,
    },
    /// Binary content, or text in no supported encoding.
    UnsupportedEncoding,
    /// The file could not be opened for lack of permission.
    NoAccess,
    /// Any other I/O failure, with its message.
    ReadError(String),
}

/// How placeholders for unreadable files are worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Long, descriptive markers for the bulk text format.
    Verbose,
    /// Short markers for the slim and JSON formats.
    Compact,
}

impl FileContent {
    /// The text written into a document for this outcome.
    ///
    /// # Examples
    /// ```
    /// use to_llm_view::reader::{FileContent, PlaceholderStyle};
    ///
    /// let big = FileContent::TooLarge { size: 2048 };
    /// assert_eq!(big.render(PlaceholderStyle::Compact), "[TOO LARGE 2048 B, SKIP]");
    /// assert_eq!(
    ///     big.render(PlaceholderStyle::Verbose),
    ///     "[FILE TOO LARGE - CONTENT SKIPPED]\nSize: 2048 Bytes"
    /// );
    /// ```
    pub fn render(&self, style: PlaceholderStyle) -> Cow<'_, str> {
        use PlaceholderStyle::{Compact, Verbose};
        match (self, style) {
            (FileContent::Text(text), _) => Cow::Borrowed(text),
            (FileContent::TooLarge { size }, Verbose) => {
                Cow::Owned(format!("[FILE TOO LARGE - CONTENT SKIPPED]\nSize: {} Bytes", size))
            }
            (FileContent::TooLarge { size }, Compact) => {
                Cow::Owned(format!("[TOO LARGE {} B, SKIP]", size))
            }
            (FileContent::UnsupportedEncoding, Verbose) => {
                Cow::Borrowed("[BINARY FILE OR UNSUPPORTED ENCODING]")
            }
            (FileContent::UnsupportedEncoding, Compact) => Cow::Borrowed("[UNSUPPORTED ENCODING]"),
            (FileContent::NoAccess, Verbose) => Cow::Borrowed("[NO FILE ACCESS RIGHTS]"),
            (FileContent::NoAccess, Compact) => Cow::Borrowed("[NO ACCESS]"),
            (FileContent::ReadError(msg), Verbose) => {
                Cow::Owned(format!("[FILE READING ERROR: {}]", msg))
            }
            (FileContent::ReadError(msg), Compact) => Cow::Owned(format!("[READING ERROR: {}]", msg)),
        }
    }

    /// Whether the file's text was read.
    pub fn is_text(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

/// Reads `path` (relative to `root`) as text, recording problems in `stats`.
///
/// Returns `None` only when the file does not exist; the caller counts it
/// as skipped. A file strictly larger than `max_filesize` bytes yields
/// [`FileContent::TooLarge`] without being read. The counters in `stats` are
/// left to the caller; only `stats.errors` is appended to here.
pub fn read_file(
    root: &Path,
    path: &str,
    max_filesize: u64,
    stats: &mut ConversionStats,
) -> Option<FileContent> {
    let full_path = root.join(path);

    let metadata = match fs::metadata(&full_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            stats.errors.push(format!("File doesn't exist: {}", path));
            return None;
        }
        Err(e) => return Some(io_failure(e, path, stats)),
    };

    if metadata.is_dir() {
        let msg = "Is a directory".to_string();
        stats
            .errors
            .push(format!("Unexpected error reading {}: {}", path, msg));
        return Some(FileContent::ReadError(msg));
    }

    let size = metadata.len();
    if size > max_filesize {
        stats
            .errors
            .push(format!("File too large (>{} Bytes): {}", max_filesize, path));
        return Some(FileContent::TooLarge { size });
    }

    let bytes = match fs::read(&full_path) {
        Ok(bytes) => bytes,
        Err(e) => return Some(io_failure(e, path, stats)),
    };

    match decode_text(&bytes) {
        Some((text, encoding)) => {
            log::debug!("Read {} ({} bytes, {})", path, bytes.len(), encoding);
            Some(FileContent::Text(text))
        }
        None => {
            stats
                .errors
                .push(format!("Binary file or unsupported encoding: {}", path));
            Some(FileContent::UnsupportedEncoding)
        }
    }
}

fn io_failure(e: io::Error, path: &str, stats: &mut ConversionStats) -> FileContent {
    if e.kind() == io::ErrorKind::PermissionDenied {
        stats.errors.push(format!("No access rights to file: {}", path));
        FileContent::NoAccess
    } else {
        let msg = e.to_string();
        stats
            .errors
            .push(format!("Unexpected error reading {}: {}", path, msg));
        FileContent::ReadError(msg)
    }
}
