// src/config/parsing.rs

use crate::constants::DEFAULT_MAX_FILESIZE;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

static FILESIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))\s*(b|kb|mb|gb|tb)?$")
        .expect("filesize pattern is valid")
});

/// Parses a human-readable size ("4kb", "1.5mb", "2048") into bytes.
///
/// Units are binary multiples: `kb` is 1024, `mb` is 1024², and so on up to
/// `tb`. A bare number is a byte count. Fractional values are rounded to the
/// nearest byte. Strings outside this grammar fall back to 1 MiB instead of
/// failing, so a typo never aborts a run.
///
/// # Examples
/// ```
/// use to_llm_view::config::convert_filesize;
///
/// assert_eq!(convert_filesize("4kb"), 4096);
/// assert_eq!(convert_filesize("1.5MB"), 1_572_864);
/// assert_eq!(convert_filesize("garbage"), 1_048_576);
/// ```
pub fn convert_filesize(size: &str) -> u64 {
    let normalized = size.trim().to_lowercase();
    let Some(caps) = FILESIZE_RE.captures(&normalized) else {
        log::warn!(
            "Unrecognized file size '{}', using default of {} bytes",
            size,
            DEFAULT_MAX_FILESIZE
        );
        return DEFAULT_MAX_FILESIZE;
    };

    let Ok(value) = caps[1].parse::<f64>() else {
        return DEFAULT_MAX_FILESIZE;
    };
    let multiplier: f64 = match caps.get(2).map(|m| m.as_str()) {
        None | Some("b") => 1.0,
        Some("kb") => 1024.0,
        Some("mb") => 1024f64.powi(2),
        Some("gb") => 1024f64.powi(3),
        Some("tb") => 1024f64.powi(4),
        Some(_) => unreachable!("unit alternatives are fixed by FILESIZE_RE"),
    };

    let bytes = (value * multiplier).round();
    if bytes < 0.0 {
        log::warn!("Negative file size '{}' clamped to 0 bytes", size);
        return 0;
    }
    // Saturating float-to-int conversion.
    bytes as u64
}

/// Normalizes a comma-separated extension list ("py, .JS,html") into a set
/// of lower-case, dot-prefixed extensions. Empty tokens are dropped, so an
/// empty input yields an empty set, which callers treat as "no filter".
///
/// # Examples
/// ```
/// use to_llm_view::config::parse_extensions;
///
/// let exts = parse_extensions("py, .JS,,html");
/// assert_eq!(exts.into_iter().collect::<Vec<_>>(), vec![".html", ".js", ".py"]);
/// assert!(parse_extensions("").is_empty());
/// ```
pub fn parse_extensions(ext_string: &str) -> BTreeSet<String> {
    ext_string
        .split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_lowercase()
            } else {
                format!(".{}", ext.to_lowercase())
            }
        })
        .collect()
}

/// Compiles an optional filter pattern case-insensitively.
pub(super) fn compile_filter_regex(
    pattern: Option<String>,
    name: &'static str,
) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            RegexBuilder::new(&p)
                .case_insensitive(true)
                .build()
                .map_err(|source| Error::InvalidRegex {
                    name,
                    pattern: p.clone(),
                    source,
                })
        })
        .transpose()
}
