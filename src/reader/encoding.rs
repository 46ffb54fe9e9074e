// src/reader/encoding.rs

use content_inspector::ContentType;
use encoding_rs::WINDOWS_1251;
use std::fmt;

const CP1251_UNASSIGNED: u8 = 0x98;

/// Text encodings tried when decoding file content, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, including content with a byte order mark.
    Utf8,
    /// The Cyrillic Windows codepage.
    Windows1251,
    /// ISO-8859-1, where every byte maps to the code point of the same value.
    Latin1,
}

impl TextEncoding {
    /// Decoding order.
    pub const CHAIN: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Windows1251,
        TextEncoding::Latin1,
    ];

    /// Strictly decodes `bytes`, returning `None` on any malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            // 0x98 is unassigned in cp1251; encoding_rs would map it to U+0098.
            TextEncoding::Windows1251 if bytes.contains(&CP1251_UNASSIGNED) => None,
            TextEncoding::Windows1251 => WINDOWS_1251
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1251 => "windows-1251",
            TextEncoding::Latin1 => "latin-1",
        };
        f.write_str(name)
    }
}

/// Decodes file content as text.
///
/// Content that `content_inspector` classifies as binary (NUL bytes, or a
/// UTF-16/UTF-32 byte order mark) is rejected up front. Everything else is
/// decoded with the first encoding in [`TextEncoding::CHAIN`] that accepts
/// it.
///
/// # Examples
/// ```
/// use to_llm_view::reader::{decode_text, TextEncoding};
///
/// assert_eq!(decode_text(b"plain ascii"), Some(("plain ascii".to_string(), TextEncoding::Utf8)));
///
/// let cp1251 = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
/// assert_eq!(decode_text(&cp1251), Some(("Привет".to_string(), TextEncoding::Windows1251)));
///
/// assert_eq!(decode_text(b"\x7fELF\0\0\0"), None);
/// ```
pub fn decode_text(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    match content_inspector::inspect(bytes) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {}
        other => {
            log::debug!("Content classified as {:?}, not decoding", other);
            return None;
        }
    }

    TextEncoding::CHAIN
        .into_iter()
        .find_map(|encoding| encoding.decode(bytes).map(|text| (text, encoding)))
}
