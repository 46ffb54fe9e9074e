// src/output/bulk.rs

use super::{product_signature, timestamp, Converter, Document, FileRecord};
use crate::errors::Result;
use crate::reader::PlaceholderStyle;

const SEPARATOR_WIDTH: usize = 80;
const TREE_RULE_WIDTH: usize = 50;
const ERROR_RULE_WIDTH: usize = 40;

/// Verbose text format: a statistics header, an ASCII tree, each file in a
/// framed block, and a footer listing every error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkText;

impl Converter for BulkText {
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Verbose
    }

    fn render(&self, document: &Document) -> Result<String> {
        let mut out = header(document);
        out.push_str(&tree(document));
        out.push_str(&file_blocks(&document.records));
        out.push_str(&footer(document, &timestamp()));
        Ok(out)
    }
}

fn header(document: &Document) -> String {
    let stats = &document.stats;
    format!(
        "\nDirectory: {}\nCreation date: {}\nCreated by: {}\n\n\
         STATISTICS:\n\
         - Processed files: {}\n\
         - Skipped files: {}\n\
         - Processing errors: {}\n\n\
         {}\n\n",
        document.directory,
        document.created_at,
        product_signature(),
        stats.processed_files,
        stats.skipped_files,
        stats.errors.len(),
        "=".repeat(SEPARATOR_WIDTH),
    )
}

fn tree(document: &Document) -> String {
    let rule = "=".repeat(TREE_RULE_WIDTH);
    let mut lines = vec!["PROJECT STRUCTURE:".to_string(), rule.clone(), String::new()];
    lines.extend(document.tree.ascii_lines());
    lines.extend([String::new(), rule, String::new(), String::new()]);
    lines.join("\n")
}

fn file_blocks(records: &[FileRecord]) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut parts: Vec<String> = Vec::with_capacity(records.len() * 9);
    for record in records {
        parts.extend([
            separator.clone(),
            format!("FILE: {}", record.path),
            format!("SIZE: {} characters", record.length),
            format!("PROCESSED: {}", record.processed_at),
            separator.clone(),
            String::new(),
            record.content.clone(),
            String::new(),
            String::new(),
        ]);
    }
    parts.join("\n")
}

fn footer(document: &Document, completed_at: &str) -> String {
    let stats = &document.stats;
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "PROCESSING COMPLETE".to_string(),
        rule.clone(),
        String::new(),
        format!("Total processed files: {}", stats.processed_files),
        format!("Skipped files: {}", stats.skipped_files),
        format!("Total errors: {}", stats.errors.len()),
        String::new(),
    ];

    if !stats.errors.is_empty() {
        lines.extend([
            "ERROR DETAILS:".to_string(),
            "-".repeat(ERROR_RULE_WIDTH),
            String::new(),
        ]);
        lines.extend(stats.errors.iter().map(|e| format!("• {}", e)));
        lines.push(String::new());
    }

    lines.extend([format!("Export completed: {}", completed_at), rule]);
    lines.join("\n")
}
