// src/output/mod.rs

//! Converters turning the selected files into one document.
//!
//! Every converter shares the same pass over the files (read, count, record)
//! and differs only in how it renders the collected [`Document`] and words
//! its placeholders. The set of converters is closed: [`ConverterKind`] names
//! each one and carries its metadata and command line arguments.

use crate::config::convert_filesize;
use crate::constants::{DEFAULT_MAX_FILESIZE, PRODUCT_NAME, TIMESTAMP_FORMAT};
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use crate::reader::{read_file, ConversionStats, PlaceholderStyle};
use crate::tree::DirectoryTree;
use clap::{Arg, ArgMatches, Command};
use std::path::Path;

mod bulk;
mod json;
mod slim;
pub mod writer;

pub use bulk::BulkText;
pub use json::JsonBasic;
pub use slim::SlimText;
pub use writer::write_document;

/// Identifies one of the available converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterKind {
    /// `txt.bulk`: verbose, framed plain text.
    #[default]
    BulkText,
    /// `txt.slim`: compact plain text with fenced contents.
    SlimText,
    /// `json.basic`: a single JSON object.
    Json,
}

impl ConverterKind {
    /// Every converter, in the order they are listed to users.
    pub const ALL: [ConverterKind; 3] = [
        ConverterKind::BulkText,
        ConverterKind::SlimText,
        ConverterKind::Json,
    ];

    /// Looks a converter up by its registered name.
    ///
    /// # Errors
    /// `Error::UnknownConverter` if no converter has that name.
    ///
    /// # Examples
    /// ```
    /// use to_llm_view::output::ConverterKind;
    ///
    /// assert_eq!(ConverterKind::from_name("txt.slim").unwrap(), ConverterKind::SlimText);
    /// assert!(ConverterKind::from_name("TXT.SLIM").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownConverter(name.to_string()))
    }

    /// The name used with `--converter`.
    pub fn name(self) -> &'static str {
        match self {
            ConverterKind::BulkText => "txt.bulk",
            ConverterKind::SlimText => "txt.slim",
            ConverterKind::Json => "json.basic",
        }
    }

    /// One-line description shown when listing converters.
    pub fn help(self) -> &'static str {
        match self {
            ConverterKind::BulkText => {
                "Converts codebase to a single text file with framed sections and statistics."
            }
            ConverterKind::SlimText => {
                "Converts codebase to a single slim text file with structured formatting."
            }
            ConverterKind::Json => "Converts codebase to a single json file.",
        }
    }

    /// Extension appended to the output name.
    pub fn file_extension(self) -> &'static str {
        match self {
            ConverterKind::BulkText | ConverterKind::SlimText => "txt",
            ConverterKind::Json => "json",
        }
    }

    /// The arguments this converter adds to the command line.
    pub fn converter_args(self) -> Vec<Arg> {
        // All current converters take the same size cap.
        vec![Arg::new("max_filesize")
            .short('m')
            .long("max-filesize")
            .visible_alias("mf")
            .value_name("SIZE")
            .default_value("1mb")
            .help("Maximum filesize to include (float, e.g.: 1.1mb, 2kb, 1.444gb, etc.)")]
    }

    /// Adds this converter's arguments to `command`.
    pub fn register_args(self, command: Command) -> Command {
        command.args(self.converter_args())
    }

    /// The renderer behind this kind.
    pub fn converter(self) -> &'static dyn Converter {
        match self {
            ConverterKind::BulkText => &BulkText,
            ConverterKind::SlimText => &SlimText,
            ConverterKind::Json => &JsonBasic,
        }
    }
}

/// Values of the converter-specific arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Files larger than this many bytes are not read.
    pub max_filesize: u64,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            max_filesize: DEFAULT_MAX_FILESIZE,
        }
    }
}

impl ConverterOptions {
    /// Reads the options back from parsed matches. Arguments the matches do
    /// not know about keep their defaults.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let max_filesize = matches
            .try_get_one::<String>("max_filesize")
            .ok()
            .flatten()
            .map(|size| convert_filesize(size))
            .unwrap_or(DEFAULT_MAX_FILESIZE);
        Self { max_filesize }
    }
}

/// One processed file as it appears in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the repository root.
    pub path: String,
    /// The file's text, or a placeholder for unreadable files.
    pub content: String,
    /// Length of `content` in characters.
    pub length: usize,
    /// When the file was read.
    pub processed_at: String,
}

/// Everything a converter renders: metadata, tree, records and statistics.
#[derive(Debug, Clone)]
pub struct Document {
    /// Repository root, as displayed in the header.
    pub directory: String,
    /// When collection finished.
    pub created_at: String,
    /// Directory structure of all selected files.
    pub tree: DirectoryTree,
    /// Processed files in selection order.
    pub records: Vec<FileRecord>,
    /// Counters and error log of the pass.
    pub stats: ConversionStats,
}

impl Document {
    /// Runs the shared pass: reads every file in order, renders failures as
    /// `style` placeholders and counts processed and skipped files.
    #[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
    pub fn collect(
        repo_root: &Path,
        files: &[String],
        max_filesize: u64,
        style: PlaceholderStyle,
        progress: Option<&dyn ProgressReporter>,
    ) -> Self {
        let tree = DirectoryTree::from_paths(files);
        let mut stats = ConversionStats::default();
        let mut records = Vec::with_capacity(files.len());

        if let Some(p) = progress {
            p.set_length(files.len() as u64);
        }
        log::info!("Processing {} files...", files.len());

        for (i, path) in files.iter().enumerate() {
            log::debug!("Processing ({}/{}): {}", i + 1, files.len(), path);
            if let Some(p) = progress {
                p.set_message(path.clone());
            }

            match read_file(repo_root, path, max_filesize, &mut stats) {
                Some(content) => {
                    let content = content.render(style).into_owned();
                    records.push(FileRecord {
                        path: path.clone(),
                        length: content.chars().count(),
                        content,
                        processed_at: timestamp(),
                    });
                    stats.processed_files += 1;
                }
                None => stats.skipped_files += 1,
            }

            if let Some(p) = progress {
                p.set_position(i as u64 + 1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message("Files processed".to_string());
        }

        Self {
            directory: repo_root.display().to_string(),
            created_at: timestamp(),
            tree,
            records,
            stats,
        }
    }
}

/// The rendered document plus the statistics of the pass that produced it.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Complete document text.
    pub text: String,
    /// Counters and error log.
    pub stats: ConversionStats,
}

/// A document format.
pub trait Converter: Sync {
    /// How placeholders for unreadable files are worded in this format.
    fn placeholder_style(&self) -> PlaceholderStyle;

    /// Renders a collected document.
    fn render(&self, document: &Document) -> Result<String>;

    /// Reads `files` from `repo_root` and renders them.
    fn create(
        &self,
        repo_root: &Path,
        files: &[String],
        options: &ConverterOptions,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Rendered> {
        let document = Document::collect(
            repo_root,
            files,
            options.max_filesize,
            self.placeholder_style(),
            progress,
        );
        let text = self.render(&document)?;
        Ok(Rendered {
            text,
            stats: document.stats,
        })
    }
}

/// Current local time in the document timestamp format.
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// `"To LLM View {version}"`.
pub(crate) fn product_signature() -> String {
    format!("{} {}", PRODUCT_NAME, env!("CARGO_PKG_VERSION"))
}
