//! Defines the core `Config` struct for a conversion run.
//!
//! All settings parsed from the command line are validated once by
//! [`ConfigBuilder`] and handed to the pipeline as a plain struct: compiled
//! regexes, a normalized extension set, the selected converter and the final
//! output path.

use crate::filtering::FilterSpec;
use crate::output::{ConverterKind, ConverterOptions};
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use parsing::{convert_filesize, parse_extensions};
pub use path_resolve::resolve_output_path;

mod builder;
mod parsing;
mod path_resolve;

/// Everything needed to turn one repository into one document.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the repository's working tree. Git is run here and
    /// every listed path is relative to it.
    pub repo_root: PathBuf,
    /// Where the rendered document is written.
    pub output_path: PathBuf,
    /// Extension and regex filters applied to the candidate list.
    pub filters: FilterSpec,
    /// The converter rendering the document.
    pub converter: ConverterKind,
    /// Converter-specific options (the size cap).
    pub options: ConverterOptions,
}
