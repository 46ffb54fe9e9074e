// src/constants.rs

/// Product name written into every document header.
pub const PRODUCT_NAME: &str = "To LLM View";

/// Default base name of the output file (the converter's extension is appended).
pub const DEFAULT_OUTPUT_NAME: &str = "codebase_export";

/// Converter used when `--converter` is not given.
pub const DEFAULT_CONVERTER: &str = "txt.bulk";

/// Size cap applied when no `--max-filesize` is given, and the fallback for
/// unparseable size strings. 1 MiB.
pub const DEFAULT_MAX_FILESIZE: u64 = 1024 * 1024;

/// Format of every timestamp written into a document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Marker entry whose presence identifies a git working tree.
pub const GIT_MARKER: &str = ".git";
