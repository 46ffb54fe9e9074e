// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{git_available, TestRepo};
use predicates::prelude::*;

#[test]
fn test_default_bulk_export() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[
        ("src/main.rs", "fn main() {}"),
        ("README.md", "# Demo"),
    ])?;

    repo.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed files: 2"))
        .stdout(predicate::str::contains("Skipped files:   0"))
        .stdout(predicate::str::contains("codebase_export.txt"));

    let doc = repo.read_output("codebase_export.txt")?;
    assert!(doc.starts_with("\nDirectory: "));
    assert!(doc.contains(&format!("Created by: To LLM View {}\n", env!("CARGO_PKG_VERSION"))));
    assert!(doc.contains("- Processed files: 2\n- Skipped files: 0\n- Processing errors: 0\n"));
    assert!(doc.contains("PROJECT STRUCTURE:\n"));
    assert!(doc.contains("├── README.md\n└── src\n    └── main.rs\n"));
    assert!(doc.contains("FILE: src/main.rs\nSIZE: 12 characters\nPROCESSED: "));
    assert!(doc.contains("\n\nfn main() {}\n\n"));
    assert!(doc.contains("PROCESSING COMPLETE"));
    assert!(!doc.contains("ERROR DETAILS:"));
    assert!(doc.ends_with(&"=".repeat(80)));
    Ok(())
}

#[test]
fn test_files_follow_git_listing_order() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("b.txt", "bee"), ("a.txt", "ay")])?;
    repo.write("0_untracked.txt", "new")?;

    repo.cmd().assert().success();

    let doc = repo.read_output("codebase_export.txt")?;
    let a = doc.find("FILE: a.txt");
    let b = doc.find("FILE: b.txt");
    let untracked = doc.find("FILE: 0_untracked.txt");
    assert!(a.is_some() && b.is_some() && untracked.is_some());
    // Tracked files first, in git order, then untracked ones.
    assert!(a < b && b < untracked);
    Ok(())
}

#[test]
fn test_ignored_files_are_excluded() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[(".gitignore", "*.log\nbuild/\n"), ("app.py", "print(1)")])?;
    repo.write("debug.log", "noise")?;
    repo.write("build/out.py", "generated")?;
    repo.write("notes.md", "todo")?;

    repo.cmd().assert().success();

    let doc = repo.read_output("codebase_export.txt")?;
    assert!(doc.contains("FILE: notes.md"));
    assert!(doc.contains("FILE: app.py"));
    assert!(!doc.contains("debug.log"));
    assert!(!doc.contains("build/out.py"));
    Ok(())
}

#[test]
fn test_custom_output_name() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("a.txt", "a")])?;

    repo.cmd().args(["-o", "dump"]).assert().success();

    assert!(repo.root.join("dump.txt").exists());
    assert!(!repo.root.join("codebase_export.txt").exists());
    Ok(())
}

#[test]
fn test_root_flag_writes_beside_repository() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("a.txt", "a")])?;

    repo.cmd()
        .args(["-r", "-o", "out", "-c", "json.basic"])
        .assert()
        .success();

    assert!(repo.temp.path().join("project.out.json").exists());
    assert!(!repo.root.join("out.json").exists());
    Ok(())
}

#[test]
fn test_rerun_does_not_embed_previous_export() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("a.txt", "a")])?;

    repo.cmd().assert().success();
    repo.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed files: 1"));

    let doc = repo.read_output("codebase_export.txt")?;
    assert!(!doc.contains("FILE: codebase_export.txt"));
    Ok(())
}

#[test]
fn test_deleted_tracked_file_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("keep.txt", "keep"), ("gone.txt", "gone")])?;
    std::fs::remove_file(repo.root.join("gone.txt"))?;

    repo.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed files: 1"))
        .stdout(predicate::str::contains("Skipped files:   1"))
        .stderr(predicate::str::contains("Errors found: 1"));

    let doc = repo.read_output("codebase_export.txt")?;
    assert!(doc.contains("- Skipped files: 1\n"));
    // Still listed in the tree, even though its content is absent.
    assert!(doc.contains("├── gone.txt\n"));
    assert!(doc.contains("• File doesn't exist: gone.txt"));
    Ok(())
}
