//! Defines application-specific error types.
//!
//! Only fatal, run-aborting conditions are represented here. Per-file read
//! problems never surface as an `Error`; the reader turns them into
//! placeholders and entries in the run's error log instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum Error {
    /// The working directory has no `.git` entry.
    #[error("current directory is not a Git repository: {}", .0.display())]
    NotAGitRepository(PathBuf),

    /// The `git` executable could not be spawned.
    #[error("Git is not installed or not found in PATH")]
    GitNotInstalled,

    /// A git listing command exited unsuccessfully.
    #[error("Git command error (`git {command}`): {stderr}")]
    GitCommandFailed {
        /// The git subcommand and its arguments.
        command: String,
        /// Diagnostic text git printed on stderr.
        stderr: String,
    },

    /// Argument parsing failed, or help/version output was requested.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// The `--converter` value names no known converter.
    #[error("Invalid converter: '{0}'")]
    UnknownConverter(String),

    /// A user-supplied regex failed to compile.
    #[error("Invalid {name} regex '{pattern}': {source}")]
    InvalidRegex {
        /// Which filter the pattern belongs to ("blacklist" or "whitelist").
        name: &'static str,
        /// The pattern as given on the command line.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// Configuration that cannot be turned into a runnable `Config`.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Filtering removed every candidate file.
    #[error("No files to process after filtering")]
    NoFilesToProcess,

    /// Error occurring during file or directory access.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Failure serializing the JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Specialized `Result` for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_git_failure_message_carries_stderr() {
        let error = Error::GitCommandFailed {
            command: "ls-tree -r HEAD --name-only -z".to_string(),
            stderr: "fatal: Not a valid object name HEAD".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ls-tree"));
        assert!(message.contains("Not a valid object name HEAD"));
    }

    #[test]
    fn test_invalid_regex_keeps_source() {
        let source = regex::Regex::new("[").unwrap_err();
        let error = Error::InvalidRegex {
            name: "blacklist",
            pattern: "[".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid blacklist regex '['"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
