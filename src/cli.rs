// src/cli.rs

use crate::constants::{DEFAULT_CONVERTER, DEFAULT_OUTPUT_NAME};
use crate::errors::Result;
#[cfg(test)]
use crate::errors::Error;
use crate::output::{ConverterKind, ConverterOptions};
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

/// Codebase converter to a unified document for working with neural networks.
///
/// Collects every file git tracks in the current repository, plus untracked
/// files that are not ignored, filters them, and writes their directory
/// structure and contents into one text or JSON file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Example: to-llm-view -r --rb "(^\.)|(^tsconfig)" --rw ".*\.component\..*" -o output -m 4kb"#)]
pub struct Cli {
    /// Output filename without extension (the converter's extension is appended).
    #[arg(short = 'o', long, value_name = "NAME", default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Create the output file beside the current folder, not inside it,
    /// prefixed with the folder's name.
    #[arg(short = 'r', long, action = ArgAction::SetTrue)]
    pub root: bool,

    /// File extensions to include (comma separated, e.g.: py,js,html).
    #[arg(short = 'w', long, value_name = "EXTS")]
    pub whitelist: Option<String>,

    /// Exclude paths matching this regex at their start (case-insensitive).
    #[arg(short = 'x', long, visible_alias = "rb", value_name = "REGEX")]
    pub regex_blacklist: Option<String>,

    /// Include only paths matching this regex at their start (case-insensitive).
    #[arg(short = 'i', long, visible_alias = "rw", value_name = "REGEX")]
    pub regex_whitelist: Option<String>,

    /// Converter to use (txt.bulk, txt.slim, json.basic).
    #[arg(short = 'c', long, value_name = "NAME", default_value = DEFAULT_CONVERTER)]
    pub converter: String,
}

/// A fully parsed command line: the shared flags, the selected converter and
/// the options that converter registered.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Flags common to every converter.
    pub cli: Cli,
    /// The converter selected with `--converter`.
    pub converter: ConverterKind,
    /// Values of the converter-specific arguments.
    pub options: ConverterOptions,
}

/// Parses the process arguments in two passes.
///
/// The first pass only discovers which converter was requested, so that the
/// converter can register its own arguments before the real parse. Help and
/// version requests are reported as `Error::Cli` so the caller can let clap
/// print them and exit.
///
/// # Errors
/// `Error::UnknownConverter` when the converter name is not registered (and
/// help was not requested), `Error::Cli` for anything clap rejects.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let (converter_name, help_requested) = peek_converter(&args);
    let converter = match ConverterKind::from_name(&converter_name) {
        Ok(kind) => kind,
        // Let clap render the help text with the default converter's arguments.
        Err(_) if help_requested => ConverterKind::default(),
        Err(e) => return Err(e),
    };

    let command = converter.register_args(Cli::command());
    let matches = command.try_get_matches_from(&args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let options = ConverterOptions::from_matches(&matches);

    log::debug!("Parsed invocation: {:?}, converter {}", cli, converter.name());

    Ok(Invocation {
        cli,
        converter,
        options,
    })
}

/// Lenient pre-pass returning the requested converter name and whether help
/// was asked for. Every converter's arguments are registered so their values
/// are not mistaken for unknown flags.
fn peek_converter(args: &[OsString]) -> (String, bool) {
    let mut command = Cli::command()
        .ignore_errors(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("peek_help").short('h').long("help").action(ArgAction::SetTrue));

    for kind in ConverterKind::ALL {
        for arg in kind.converter_args() {
            if command.get_arguments().all(|a| a.get_id() != arg.get_id()) {
                command = command.arg(arg);
            }
        }
    }

    match command.try_get_matches_from(args) {
        Ok(matches) => (
            matches
                .get_one::<String>("converter")
                .cloned()
                .unwrap_or_else(|| DEFAULT_CONVERTER.to_string()),
            matches.get_flag("peek_help"),
        ),
        Err(e) => {
            log::debug!("Converter pre-parse failed, using default: {}", e);
            (DEFAULT_CONVERTER.to_string(), false)
        }
    }
}
