// src/output/slim.rs

use super::{product_signature, Converter, Document, FileRecord};
use crate::errors::Result;
use crate::reader::PlaceholderStyle;

const RULE: &str = "---";
const FENCE: &str = "```";

/// Compact text format: pipe-separated header fields, a dash outline of the
/// tree and each file's content in a code fence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlimText;

impl Converter for SlimText {
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Compact
    }

    fn render(&self, document: &Document) -> Result<String> {
        let mut out = header(document);
        out.push_str(&tree(document));
        out.push_str(&file_blocks(&document.records));
        out.push_str(&footer(&document.stats.errors));
        Ok(out)
    }
}

fn header(document: &Document) -> String {
    let stats = &document.stats;
    format!(
        "\n{}\ndir | date\n{} | {}\n\nprocessed | skipped | errors\n{} | {} | {}\n\n{}\n",
        product_signature(),
        document.directory,
        document.created_at,
        stats.processed_files,
        stats.skipped_files,
        stats.errors.len(),
        RULE,
    )
}

fn tree(document: &Document) -> String {
    let mut lines = vec!["STRUCTURE:".to_string(), String::new()];
    lines.extend(document.tree.outline_lines());
    lines.extend([String::new(), RULE.to_string(), String::new(), String::new()]);
    lines.join("\n")
}

fn file_blocks(records: &[FileRecord]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(records.len() * 8);
    for record in records {
        parts.extend([
            RULE.to_string(),
            "PATH | LENGTH".to_string(),
            format!("{} | {}", record.path, record.length),
            "content:".to_string(),
            FENCE.to_string(),
            record.content.clone(),
            FENCE.to_string(),
            String::new(),
        ]);
    }
    parts.join("\n")
}

fn footer(errors: &[String]) -> String {
    let mut lines = vec![RULE.to_string(), "DONE".to_string()];
    if !errors.is_empty() {
        lines.extend(["ERRORS:".to_string(), RULE.to_string(), String::new()]);
        for error in errors {
            lines.extend([FENCE.to_string(), error.clone(), FENCE.to_string()]);
        }
    }
    lines.join("\n")
}
