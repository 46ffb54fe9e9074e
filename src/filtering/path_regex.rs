// src/filtering/path_regex.rs

use regex::Regex;

/// Whether `regex` matches `path` starting at its first character.
///
/// The match does not need to span the whole path: `src/` matches
/// `src/main.rs`. The search reports the leftmost match, so a match at
/// offset 0 is found whenever one exists.
pub fn matches_at_start(regex: &Regex, path: &str) -> bool {
    regex.find(path).map_or(false, |m| m.start() == 0)
}

/// Applies the path blacklist and whitelist to a single path.
///
/// A path is kept when it does not match the blacklist at its start and, if
/// a whitelist is set, matches the whitelist at its start.
///
/// # Examples
///
/// ```
/// use to_llm_view::filtering::passes_regex_filters;
/// use regex::RegexBuilder;
///
/// let hidden = RegexBuilder::new(r"^\.").case_insensitive(true).build().unwrap();
/// assert!(!passes_regex_filters(".env", Some(&hidden), None));
/// assert!(passes_regex_filters("src/.hidden", Some(&hidden), None));
///
/// let components = RegexBuilder::new(r".*\.component\..*").build().unwrap();
/// assert!(passes_regex_filters("app/nav.component.ts", None, Some(&components)));
/// assert!(!passes_regex_filters("app/nav.service.ts", None, Some(&components)));
/// ```
pub fn passes_regex_filters(path: &str, blacklist: Option<&Regex>, whitelist: Option<&Regex>) -> bool {
    if let Some(re) = blacklist {
        if matches_at_start(re, path) {
            return false;
        }
    }
    whitelist.map_or(true, |re| matches_at_start(re, path))
}
