// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::{tempdir, TempDir};

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn to_llm_view_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("to-llm-view"))
}

/// Whether a usable `git` executable is on the PATH. Tests that need a
/// repository return early without it.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Runs git in `dir` with a throwaway identity.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let status = Command::new("git")
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("git {:?} failed with {}", args, status).into())
    }
}

/// A temporary git repository living at `<tempdir>/project`, so that
/// `--root` output lands inside the temporary directory too.
#[allow(dead_code)]
pub struct TestRepo {
    pub temp: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Creates the repository and commits `committed` files.
    pub fn with_files(committed: &[(&str, &str)]) -> Result<Self, Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let root = temp.path().join("project");
        fs::create_dir(&root)?;
        git(&root, &["init", "-q"])?;

        let repo = Self { temp, root };
        for (path, content) in committed {
            repo.write(path, content)?;
        }
        git(&repo.root, &["add", "-A"])?;
        git(&repo.root, &["commit", "-q", "--allow-empty", "-m", "init"])?;
        Ok(repo)
    }

    /// Writes a file in the working tree without committing it.
    pub fn write(
        &self,
        relative_path: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let file_path = self.root.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(())
    }

    /// Reads a document the tool wrote inside the repository.
    pub fn read_output(&self, name: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(self.root.join(name))?)
    }

    /// The binary, running inside the repository.
    pub fn cmd(&self) -> Command {
        let mut cmd = to_llm_view_cmd();
        cmd.current_dir(&self.root);
        cmd
    }
}
