// src/config/builder.rs

use super::{
    parsing::{compile_filter_regex, parse_extensions},
    path_resolve::{resolve_output_path, resolve_repo_root},
    Config,
};
use crate::cli::Invocation;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::FilterSpec;
use crate::output::{ConverterKind, ConverterOptions};
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Every setter is optional. Unset values take the command line defaults,
/// and the repository root defaults to the current working directory.
///
/// # Examples
///
/// ```
/// use to_llm_view::config::ConfigBuilder;
/// use to_llm_view::output::ConverterKind;
///
/// # fn main() -> to_llm_view::errors::Result<()> {
/// let temp = tempfile::tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .repo_root(temp.path())
///     .extensions("rs, toml")
///     .regex_blacklist(r"^\.")
///     .converter(ConverterKind::Json)
///     .max_filesize(4096)
///     .build()?;
///
/// assert_eq!(config.filters.extensions.len(), 2);
/// assert!(config.output_path.ends_with("codebase_export.json"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    repo_root: Option<PathBuf>,
    output_name: Option<String>,
    beside_root: Option<bool>,
    extensions: Option<String>,
    regex_blacklist: Option<String>,
    regex_whitelist: Option<String>,
    converter: Option<ConverterKind>,
    max_filesize: Option<u64>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from a parsed command line.
    pub fn from_cli(invocation: Invocation) -> Self {
        let Invocation {
            cli,
            converter,
            options,
        } = invocation;
        Self {
            repo_root: None,
            output_name: Some(cli.output),
            beside_root: Some(cli.root),
            extensions: cli.whitelist,
            regex_blacklist: cli.regex_blacklist,
            regex_whitelist: cli.regex_whitelist,
            converter: Some(converter),
            max_filesize: Some(options.max_filesize),
        }
    }

    /// Sets the repository working tree to convert.
    pub fn repo_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.repo_root = Some(path.into());
        self
    }

    /// Sets the output file name, without extension.
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Writes the document beside the repository instead of inside it.
    pub fn beside_root(mut self, beside: bool) -> Self {
        self.beside_root = Some(beside);
        self
    }

    /// Sets the comma-separated extension whitelist.
    pub fn extensions(mut self, exts: impl Into<String>) -> Self {
        self.extensions = Some(exts.into());
        self
    }

    /// Sets the path blacklist pattern.
    pub fn regex_blacklist(mut self, pattern: impl Into<String>) -> Self {
        self.regex_blacklist = Some(pattern.into());
        self
    }

    /// Sets the path whitelist pattern.
    pub fn regex_whitelist(mut self, pattern: impl Into<String>) -> Self {
        self.regex_whitelist = Some(pattern.into());
        self
    }

    /// Selects the converter.
    pub fn converter(mut self, converter: ConverterKind) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Sets the per-file size cap in bytes.
    pub fn max_filesize(mut self, bytes: u64) -> Self {
        self.max_filesize = Some(bytes);
        self
    }

    /// Validates the settings and produces a `Config`.
    ///
    /// # Errors
    /// `Error::InvalidRegex` for a pattern that does not compile,
    /// `Error::Config` for an unusable output name, and `Error::Io` when the
    /// repository root cannot be resolved.
    pub fn build(self) -> Result<Config> {
        let repo_root = match self.repo_root {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?,
        };
        let repo_root = resolve_repo_root(&repo_root)?;

        let filters = FilterSpec {
            extensions: self
                .extensions
                .as_deref()
                .map(parse_extensions)
                .unwrap_or_default(),
            blacklist: compile_filter_regex(self.regex_blacklist, "blacklist")?,
            whitelist: compile_filter_regex(self.regex_whitelist, "whitelist")?,
        };

        let converter = self.converter.unwrap_or_default();
        let options = match self.max_filesize {
            Some(max_filesize) => ConverterOptions { max_filesize },
            None => ConverterOptions::default(),
        };

        let output_name = self
            .output_name
            .unwrap_or_else(|| crate::constants::DEFAULT_OUTPUT_NAME.to_string());
        let output_path = resolve_output_path(
            &repo_root,
            &output_name,
            converter.file_extension(),
            self.beside_root.unwrap_or(false),
        )?;

        let config = Config {
            repo_root,
            output_path,
            filters,
            converter,
            options,
        };
        log::debug!("Built config: {:?}", config);
        Ok(config)
    }
}
