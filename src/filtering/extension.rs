// src/filtering/extension.rs

use std::collections::BTreeSet;
use std::path::Path;

/// Checks whether a path's final extension is in `extensions`.
///
/// The extension is the part of the file name after its last dot,
/// lower-cased and dot-prefixed, so `"c/d.PY"` yields `".py"`. Names with no
/// dot, and dot-files such as `.gitignore`, have no extension and only pass
/// an empty set.
///
/// # Examples
///
/// ```
/// use to_llm_view::filtering::passes_extension_filter;
/// use std::collections::BTreeSet;
///
/// let exts: BTreeSet<String> = [".rs".to_string(), ".toml".to_string()].into();
/// assert!(passes_extension_filter("src/main.rs", &exts));
/// assert!(passes_extension_filter("Cargo.TOML", &exts));
/// assert!(!passes_extension_filter("Makefile", &exts));
/// assert!(!passes_extension_filter("archive.tar.gz", &exts));
///
/// // An empty set is no filter at all.
/// assert!(passes_extension_filter("Makefile", &BTreeSet::new()));
/// ```
pub fn passes_extension_filter(path: &str, extensions: &BTreeSet<String>) -> bool {
    if extensions.is_empty() {
        return true;
    }
    match Path::new(path).extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.contains(&ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(exts: &[&str]) -> BTreeSet<String> {
        exts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let exts = set(&[".py"]);
        assert!(passes_extension_filter("a.py", &exts));
        assert!(passes_extension_filter("nested/dir/B.Py", &exts));
        assert!(!passes_extension_filter("a.pyc", &exts));
    }

    #[test]
    fn test_only_final_suffix_counts() {
        let exts = set(&[".gz"]);
        assert!(passes_extension_filter("archive.tar.gz", &exts));
        assert!(!passes_extension_filter("archive.tar.gz", &set(&[".tar"])));
    }

    #[test]
    fn test_dotfiles_and_dotted_directories() {
        let exts = set(&[".gitignore", ".d"]);
        assert!(!passes_extension_filter(".gitignore", &exts));
        assert!(!passes_extension_filter("conf.d/settings", &exts));
    }
}
