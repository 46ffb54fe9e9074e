//! Lists the candidate files of a git working tree.
//!
//! Candidates are every file in the `HEAD` tree plus untracked files that no
//! ignore rule excludes. Git is driven through its command line so a missing
//! executable is reported as such instead of failing to link.

use crate::constants::GIT_MARKER;
use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;

const TRACKED_ARGS: &[&str] = &["ls-tree", "-r", "HEAD", "--name-only", "-z"];
const UNTRACKED_ARGS: &[&str] = &["ls-files", "--others", "--exclude-standard", "-z"];

/// Fails unless `repo_root` contains a `.git` entry (directory or file, so
/// linked worktrees and submodule checkouts qualify).
pub fn ensure_git_repository(repo_root: &Path) -> Result<()> {
    if repo_root.join(GIT_MARKER).exists() {
        Ok(())
    } else {
        Err(Error::NotAGitRepository(repo_root.to_path_buf()))
    }
}

/// Returns tracked files followed by untracked, non-ignored files, as
/// `/`-separated paths relative to `repo_root`.
///
/// Tracked paths come from the committed `HEAD` tree, so a file deleted from
/// the working tree but not yet committed is still listed.
///
/// # Errors
/// `Error::GitNotInstalled` when git cannot be spawned and
/// `Error::GitCommandFailed` when either listing exits unsuccessfully (for
/// example in a repository without commits).
#[tracing::instrument(level = "debug", skip_all, fields(root = %repo_root.display()))]
pub fn list_candidate_files(repo_root: &Path) -> Result<Vec<String>> {
    let tracked = run_git_listing(repo_root, TRACKED_ARGS)?;
    let untracked = run_git_listing(repo_root, UNTRACKED_ARGS)?;
    log::debug!(
        "Git reported {} tracked and {} untracked files",
        tracked.len(),
        untracked.len()
    );

    let mut seen = HashSet::with_capacity(tracked.len() + untracked.len());
    let files: Vec<String> = tracked
        .into_iter()
        .chain(untracked)
        .filter(|path| seen.insert(path.clone()))
        .collect();

    log::info!("Found {} candidate files", files.len());
    Ok(files)
}

/// Runs one NUL-delimited git listing in `repo_root` and splits its output.
fn run_git_listing(repo_root: &Path, args: &[&str]) -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::GitNotInstalled,
            _ => Error::GitCommandFailed {
                command: args.join(" "),
                stderr: e.to_string(),
            },
        })?;

    if !output.status.success() {
        return Err(Error::GitCommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(split_nul_delimited(&output.stdout))
}

fn split_nul_delimited(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|&b| b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}
