//! `to-llm-view` is a library and command-line tool that turns a git working
//! tree into a single document for pasting into a language model's context.
//!
//! The pipeline has three stages:
//! 1.  **Select**: list tracked and untracked-but-not-ignored files with git,
//!     then narrow them by extension and by path regexes.
//! 2.  **Convert**: read every selected file safely (size cap, encoding
//!     fallbacks, per-file error log) and render a bulk text, slim text or
//!     JSON document with a directory tree and statistics.
//! 3.  **Write**: store the document next to, or inside, the repository.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use to_llm_view::{convert, select, ConfigBuilder};
//! use to_llm_view::output::ConverterKind;
//!
//! # fn main() -> to_llm_view::errors::Result<()> {
//! let config = ConfigBuilder::new()
//!     .repo_root("path/to/repo")
//!     .extensions("rs,toml")
//!     .converter(ConverterKind::SlimText)
//!     .build()?;
//!
//! let files = select(&config)?;
//! let rendered = convert(&config, &files, None)?;
//! println!("{}", rendered.text);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filtering;
pub mod listing;
pub mod output;
pub mod progress;
pub mod reader;
pub mod tree;

pub use config::{Config, ConfigBuilder};
pub use reader::ConversionStats;

use crate::errors::{Error, Result};
use crate::output::Rendered;
use crate::progress::ProgressReporter;
use std::sync::Arc;

/// Lists the repository's candidate files and applies the configured filters.
///
/// The output file itself is never a candidate, so re-running never embeds a
/// previous export.
///
/// # Errors
/// `Error::NotAGitRepository` before anything else if the root has no `.git`
/// entry, then any git failure from [`listing::list_candidate_files`].
pub fn select(config: &Config) -> Result<Vec<String>> {
    listing::ensure_git_repository(&config.repo_root)?;
    let mut files = listing::list_candidate_files(&config.repo_root)?;

    if let Ok(relative) = config.output_path.strip_prefix(&config.repo_root) {
        let output_rel = relative.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
        let before = files.len();
        files.retain(|f| *f != output_rel);
        if files.len() < before {
            log::debug!("Excluded previous export '{}' from candidates", output_rel);
        }
    }

    Ok(filtering::apply(files, &config.filters))
}

/// Reads `files` and renders them with the configured converter.
pub fn convert(
    config: &Config,
    files: &[String],
    progress: Option<&dyn ProgressReporter>,
) -> Result<Rendered> {
    config
        .converter
        .converter()
        .create(&config.repo_root, files, &config.options, progress)
}

/// Executes the complete pipeline: select, convert and write.
///
/// # Returns
/// The statistics of the conversion pass on success. It returns
/// `Err(Error::NoFilesToProcess)` when filtering leaves nothing, in which
/// case no file is written. Other errors are propagated from the stages.
#[tracing::instrument(level = "debug", skip_all, fields(converter = config.converter.name()))]
pub fn run(config: &Config, progress: Option<Arc<dyn ProgressReporter>>) -> Result<ConversionStats> {
    log_settings(config);

    let files = select(config)?;
    if files.is_empty() {
        return Err(Error::NoFilesToProcess);
    }

    let rendered = convert(config, &files, progress.as_deref())?;
    log::info!("Saving result to file: {}", config.output_path.display());
    output::write_document(&config.output_path, &rendered.text)?;

    Ok(rendered.stats)
}

fn log_settings(config: &Config) {
    let filters = &config.filters;
    if !filters.extensions.is_empty() {
        let exts: Vec<&str> = filters.extensions.iter().map(String::as_str).collect();
        log::info!("Filtering by extensions: {}", exts.join(", "));
    }
    if let Some(re) = &filters.blacklist {
        log::info!("Filtering by blacklist regex: {}", re.as_str());
    }
    if let Some(re) = &filters.whitelist {
        log::info!("Filtering by whitelist regex: {}", re.as_str());
    }
    log::info!("Maximum filesize set to: {} Bytes", config.options.max_filesize);
}
