//! core/format/render.rs
//! Tag -> filename: build a filename stem out of a record's fields.

use super::super::types::{Field, MetadataRecord};
use super::{FormatString, FormatToken};

/// Render `format` for `record`. Never fails: missing values render as empty text.
///
/// The result is a file *stem* (no extension) that is safe to use as a path component.
pub fn render(format: &FormatString, record: &MetadataRecord) -> String {
    let mut out = String::new();

    for token in format.tokens() {
        match token {
            FormatToken::Literal(text) => out.push_str(text),
            FormatToken::Placeholder(Field::Filename) => out.push_str(record.filename_stem()),
            FormatToken::Placeholder(field) if field.is_numeric() => {
                if let Some(n) = record.tags.number(*field) {
                    out.push_str(&n.to_string());
                }
            }
            FormatToken::Placeholder(field) => {
                out.push_str(record.tags.text(*field).unwrap_or_default());
            }
        }
    }

    sanitize_filename(&out)
}

/// Replace characters that are illegal in a filename on any supported platform
/// (`/ \ : * ? " < > |` and control characters) with `_`.
pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
