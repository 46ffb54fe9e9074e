// tests/library_api.rs

mod common;

use common::{git_available, TestRepo};
use std::sync::Mutex;
use to_llm_view::output::ConverterKind;
use to_llm_view::progress::ProgressReporter;
use to_llm_view::{convert, select, ConfigBuilder};

/// Records everything the conversion pass reports.
#[derive(Default)]
struct RecordingProgress {
    length: Mutex<u64>,
    position: Mutex<u64>,
    messages: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingProgress {
    fn set_length(&self, len: u64) {
        *self.length.lock().unwrap() = len;
    }
    fn set_position(&self, pos: u64) {
        *self.position.lock().unwrap() = pos;
    }
    fn set_message(&self, msg: String) {
        self.messages.lock().unwrap().push(msg);
    }
    fn finish_with_message(&self, _msg: String) {}
}

#[test]
fn test_select_applies_filters_in_order() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[
        ("src/main.rs", "fn main() {}"),
        ("src/gen/out.rs", "// generated"),
        ("docs/guide.md", "# Guide"),
        ("build.rs", "fn main() {}"),
    ])?;

    let config = ConfigBuilder::new()
        .repo_root(&repo.root)
        .extensions("rs")
        .regex_blacklist("src/gen/")
        .regex_whitelist("src/")
        .build()?;

    assert_eq!(select(&config)?, vec!["src/main.rs".to_string()]);
    Ok(())
}

#[test]
fn test_convert_in_memory_reports_progress() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("a.txt", "alpha"), ("b.txt", "beta")])?;
    let config = ConfigBuilder::new()
        .repo_root(&repo.root)
        .converter(ConverterKind::Json)
        .build()?;

    let files = select(&config)?;
    let progress = RecordingProgress::default();
    let rendered = convert(&config, &files, Some(&progress))?;

    assert_eq!(rendered.stats.processed_files, 2);
    assert!(rendered.text.contains(r#""a.txt":{"path":"a.txt","len":5,"content":"alpha"}"#));
    assert_eq!(*progress.length.lock().unwrap(), 2);
    assert_eq!(*progress.position.lock().unwrap(), 2);
    assert_eq!(*progress.messages.lock().unwrap(), vec!["a.txt", "b.txt"]);
    // Nothing is written by `convert` alone.
    assert!(!config.output_path.exists());
    Ok(())
}

#[test]
fn test_stats_account_for_every_file() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let repo = TestRepo::with_files(&[("keep.txt", "keep"), ("gone.txt", "gone"), ("big.txt", "0123456789")])?;
    std::fs::remove_file(repo.root.join("gone.txt"))?;

    let config = ConfigBuilder::new()
        .repo_root(&repo.root)
        .max_filesize(4)
        .build()?;
    let files = select(&config)?;
    let rendered = convert(&config, &files, None)?;

    let stats = &rendered.stats;
    assert_eq!(stats.processed_files + stats.skipped_files, files.len());
    assert_eq!(stats.processed_files, 2);
    assert_eq!(stats.skipped_files, 1);
    assert_eq!(stats.errors.len(), 2);
    Ok(())
}
