// src/output/json.rs

use super::{product_signature, Converter, Document, FileRecord};
use crate::errors::Result;
use crate::reader::PlaceholderStyle;
use crate::tree::JsonNode;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single compact JSON object: `{header, tree, files, footer}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBasic;

impl Converter for JsonBasic {
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Compact
    }

    fn render(&self, document: &Document) -> Result<String> {
        let stats = &document.stats;
        let json = JsonDocument {
            header: Header {
                by: product_signature(),
                dir: &document.directory,
                date: &document.created_at,
                info: Info {
                    processed: stats.processed_files,
                    skipped: stats.skipped_files,
                    errors: stats.errors.len(),
                },
            },
            tree: document.tree.json_nodes(),
            files: FileMap(&document.records),
            footer: Footer {
                errors: (!stats.errors.is_empty()).then_some(stats.errors.as_slice()),
            },
        };
        Ok(serde_json::to_string(&json)?)
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    header: Header<'a>,
    tree: Vec<JsonNode<'a>>,
    files: FileMap<'a>,
    footer: Footer<'a>,
}

#[derive(Serialize)]
struct Header<'a> {
    by: String,
    dir: &'a str,
    date: &'a str,
    info: Info,
}

#[derive(Serialize)]
struct Info {
    processed: usize,
    skipped: usize,
    errors: usize,
}

#[derive(Serialize)]
struct Footer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    path: &'a str,
    len: usize,
    content: &'a str,
}

/// Records keyed by path, serialized in processing order.
struct FileMap<'a>(&'a [FileRecord]);

impl Serialize for FileMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in self.0 {
            map.serialize_entry(
                &record.path,
                &FileEntry {
                    path: &record.path,
                    len: record.length,
                    content: &record.content,
                },
            )?;
        }
        map.end()
    }
}
