// src/filtering/mod.rs

//! The filter chain applied to the candidate file list.
//!
//! Stages run in a fixed order, each consuming the output of the previous
//! one: first the extension whitelist, then the path regexes. A stage with
//! nothing configured is skipped entirely. The stage predicates are exposed
//! publicly so they can be used on single paths.

mod extension;
mod path_regex;

pub use extension::passes_extension_filter;
pub use path_regex::{matches_at_start, passes_regex_filters};

use regex::Regex;
use std::collections::BTreeSet;

/// The configured filters, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Lower-case, dot-prefixed extensions to keep. Empty keeps everything.
    pub extensions: BTreeSet<String>,
    /// Paths matching this pattern at their start are dropped.
    pub blacklist: Option<Regex>,
    /// When set, only paths matching this pattern at their start are kept.
    pub whitelist: Option<Regex>,
}

impl FilterSpec {
    /// Whether no stage would run.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.blacklist.is_none() && self.whitelist.is_none()
    }
}

/// Runs `files` through every configured stage, preserving order.
///
/// # Examples
/// ```
/// use to_llm_view::filtering::{apply, FilterSpec};
///
/// let mut spec = FilterSpec::default();
/// spec.extensions.insert(".py".to_string());
///
/// let files = vec!["a.py".to_string(), "b.JS".to_string(), "c/d.PY".to_string()];
/// assert_eq!(apply(files, &spec), vec!["a.py", "c/d.PY"]);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(candidates = files.len()))]
pub fn apply(files: Vec<String>, spec: &FilterSpec) -> Vec<String> {
    let mut files = files;

    if !spec.extensions.is_empty() {
        files.retain(|path| passes_extension_filter(path, &spec.extensions));
        log::info!("After extension filtering: {} files", files.len());
    }

    if spec.blacklist.is_some() || spec.whitelist.is_some() {
        files.retain(|path| {
            passes_regex_filters(path, spec.blacklist.as_ref(), spec.whitelist.as_ref())
        });
        log::info!("After regex filtering: {} files", files.len());
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn ci(pattern: &str) -> Regex {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
    }

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_filters_pass_everything() {
        let files = paths(&["a.py", ".env", "src/lib.rs"]);
        let spec = FilterSpec::default();
        assert!(spec.is_empty());
        assert_eq!(apply(files.clone(), &spec), files);
    }

    #[test]
    fn test_extension_scenario() {
        let mut spec = FilterSpec::default();
        spec.extensions.insert(".py".to_string());
        let out = apply(paths(&["a.py", "b.js", "c/d.PY"]), &spec);
        assert_eq!(out, paths(&["a.py", "c/d.PY"]));
    }

    #[test]
    fn test_hidden_path_blacklist_scenario() {
        let spec = FilterSpec {
            blacklist: Some(ci(r"^\.")),
            ..Default::default()
        };
        let out = apply(paths(&[".env", "src/.hidden", "main.rs"]), &spec);
        assert_eq!(out, paths(&["src/.hidden", "main.rs"]));
    }

    #[test]
    fn test_extension_stage_runs_before_regex_stage() {
        let spec = FilterSpec {
            extensions: [".rs".to_string()].into_iter().collect(),
            blacklist: Some(ci("tests/")),
            whitelist: Some(ci("(src|tests)/")),
        };
        let out = apply(
            paths(&["src/lib.rs", "src/readme.md", "tests/it.rs", "build.rs"]),
            &spec,
        );
        assert_eq!(out, paths(&["src/lib.rs"]));
    }

    #[test]
    fn test_filtering_is_idempotent_and_monotone() {
        let spec = FilterSpec {
            extensions: [".rs".to_string(), ".toml".to_string()]
                .into_iter()
                .collect(),
            blacklist: Some(ci(r"^target/")),
            whitelist: None,
        };
        let input = paths(&[
            "Cargo.toml",
            "src/main.rs",
            "target/debug/build.rs",
            "README.md",
            "TARGET/x.rs",
        ]);
        let once = apply(input.clone(), &spec);
        let twice = apply(once.clone(), &spec);
        assert_eq!(once, twice);
        assert!(once.len() <= input.len());
        assert!(once.iter().all(|p| input.contains(p)));
        assert_eq!(once, paths(&["Cargo.toml", "src/main.rs"]));
    }
}
