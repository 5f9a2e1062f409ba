//! core/format/matcher.rs
//! Filename -> tag: parse field values out of a filename with a compiled format.

use std::collections::BTreeMap;

use super::super::error::MatchError;
use super::super::types::{Field, TagFields, split_extension};
use super::super::util::parse_number;
use super::{FormatString, FormatToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// `None` = the capture was empty, which clears the field.
    Number(Option<u32>),
}

/// Field assignments produced by one successful match.
/// Fields the format does not mention are absent and stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUpdate {
    values: BTreeMap<Field, FieldValue>,
}

impl TagUpdate {
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.values.get(&field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, field: Field) -> Option<Option<u32>> {
        match self.values.get(&field) {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    pub fn apply_to(&self, tags: &mut TagFields) {
        for (field, value) in &self.values {
            match value {
                FieldValue::Text(s) => {
                    if let Some(slot) = tags.text_mut(*field) {
                        *slot = s.clone();
                    }
                }
                FieldValue::Number(n) => {
                    if let Some(slot) = tags.number_mut(*field) {
                        *slot = *n;
                    }
                }
            }
        }
    }
}

/// Match `filename` (extension included; it is stripped first) against `format`.
///
/// - A literal that follows a placeholder is found at its next occurrence; the text
///   before it is that placeholder's capture.
/// - A literal with no placeholder in front of it must sit exactly at the cursor.
/// - A trailing literal must end the filename; a trailing placeholder takes the rest.
/// - Captures are trimmed. `%filename%` matches anything and is discarded.
///
/// All-or-nothing: one bad numeric capture fails the whole match.
pub fn match_filename(format: &FormatString, filename: &str) -> Result<TagUpdate, MatchError> {
    let (stem, _) = split_extension(filename);
    let no_match = || MatchError::NoMatch(filename.to_string());

    let tokens = format.tokens();
    let mut captures: Vec<(Field, &str)> = Vec::with_capacity(tokens.len());
    let mut pending: Option<Field> = None;
    let mut rest = stem;

    for (i, token) in tokens.iter().enumerate() {
        let text = match token {
            FormatToken::Placeholder(field) => {
                pending = Some(*field);
                continue;
            }
            FormatToken::Literal(text) => text.as_str(),
        };

        let at = match pending.take() {
            None => {
                if !rest.starts_with(text) {
                    return Err(no_match());
                }
                0
            }
            Some(field) => {
                let at = if i + 1 == tokens.len() {
                    if !rest.ends_with(text) {
                        return Err(no_match());
                    }
                    rest.len() - text.len()
                } else {
                    rest.find(text).ok_or_else(no_match)?
                };
                captures.push((field, &rest[..at]));
                at
            }
        };
        rest = &rest[at + text.len()..];
    }

    match pending {
        Some(field) => captures.push((field, rest)),
        None if !rest.is_empty() => return Err(no_match()),
        None => {}
    }

    let mut update = TagUpdate::default();
    for (field, raw) in captures {
        let raw = raw.trim();
        let value = match field {
            Field::Filename => continue,
            f if f.is_numeric() => FieldValue::Number(parse_number(f, raw)?),
            _ => FieldValue::Text(raw.to_string()),
        };
        update.values.insert(field, value);
    }
    Ok(update)
}
