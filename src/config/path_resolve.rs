// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::path::{Path, PathBuf};

/// Resolves the repository root to an absolute, canonicalized path.
pub(super) fn resolve_repo_root(repo_root: &Path) -> Result<PathBuf> {
    repo_root
        .canonicalize()
        .map_err(|e| io_error_with_path(e, repo_root))
}

/// Computes where the document is written.
///
/// Normally `{repo_root}/{output_name}.{extension}`. With `beside_root` the
/// file goes into the parent directory instead and is prefixed with the
/// repository folder's name: `{parent}/{dirname}.{output_name}.{extension}`.
///
/// # Errors
/// `Error::Config` when `output_name` is empty or contains a path separator,
/// or when `beside_root` is set but the repository has no parent directory.
pub fn resolve_output_path(
    repo_root: &Path,
    output_name: &str,
    extension: &str,
    beside_root: bool,
) -> Result<PathBuf> {
    if output_name.trim().is_empty() {
        return Err(Error::Config("output name must not be empty".to_string()));
    }
    if output_name.contains('/') || output_name.contains(std::path::MAIN_SEPARATOR) {
        return Err(Error::Config(format!(
            "output name '{}' must be a file name, not a path",
            output_name
        )));
    }

    if !beside_root {
        return Ok(repo_root.join(format!("{}.{}", output_name, extension)));
    }

    let (Some(parent), Some(dir_name)) = (repo_root.parent(), repo_root.file_name()) else {
        return Err(Error::Config(format!(
            "--root needs a parent directory, but '{}' has none",
            repo_root.display()
        )));
    };
    Ok(parent.join(format!(
        "{}.{}.{}",
        dir_name.to_string_lossy(),
        output_name,
        extension
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_inside_repo() -> Result<()> {
        let path = resolve_output_path(Path::new("/work/project"), "codebase_export", "txt", false)?;
        assert_eq!(path, PathBuf::from("/work/project/codebase_export.txt"));
        Ok(())
    }

    #[test]
    fn test_output_beside_repo() -> Result<()> {
        let path = resolve_output_path(Path::new("/work/project"), "dump", "json", true)?;
        assert_eq!(path, PathBuf::from("/work/project.dump.json"));
        Ok(())
    }

    #[test]
    fn test_output_beside_filesystem_root_fails() {
        let result = resolve_output_path(Path::new("/"), "dump", "txt", true);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_output_names() {
        let root = Path::new("/work/project");
        assert!(matches!(
            resolve_output_path(root, "", "txt", false),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            resolve_output_path(root, "nested/dump", "txt", false),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_resolve_repo_root() -> Result<()> {
        let temp = tempdir().map_err(|e| io_error_with_path(e, "tempdir"))?;
        let resolved = resolve_repo_root(temp.path())?;
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());

        let missing = resolve_repo_root(&temp.path().join("missing"));
        assert!(matches!(missing, Err(Error::Io { .. })));
        Ok(())
    }
}
