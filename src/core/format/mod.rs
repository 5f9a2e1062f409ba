//! core/format/mod.rs
//!
//! Format strings: user-authored patterns like `%artist%- %title%`.
//! Public API:
//! - [`compile`] turns a pattern into a [`FormatString`] (ordered literal/placeholder tokens).
//! - [`match_filename`] parses tag values out of a filename.
//! - [`render`] builds a filename out of tag values.

mod matcher;
mod render;

use std::fmt;
use std::str::FromStr;

use super::error::FormatError;
use super::types::Field;

pub use matcher::{FieldValue, TagUpdate, match_filename};
pub use render::{render, sanitize_filename};

/// Placeholder delimiter, used on both sides of a field name.
pub const MARKER: char = '%';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    Literal(String),
    Placeholder(Field),
}

/// A compiled format string.
///
/// Invariants (enforced by [`compile`]):
/// - at least one placeholder
/// - no two placeholders are adjacent
/// - no two literals are adjacent (they are merged)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatString {
    pattern: String,
    tokens: Vec<FormatToken>,
}

impl FormatString {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    /// Fields this format reads or writes, in token order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            FormatToken::Placeholder(f) => Some(*f),
            FormatToken::Literal(_) => None,
        })
    }
}

impl FromStr for FormatString {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl fmt::Display for FormatString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Compile a pattern into tokens.
///
/// - `%name%` with a recognized name (case-insensitive) becomes a placeholder.
/// - An unknown name or a marker with no closing partner is kept as literal text,
///   starting at the opening marker.
/// - Adjacent placeholders are rejected with [`FormatError::Ambiguous`].
pub fn compile(pattern: &str) -> Result<FormatString, FormatError> {
    let mut tokens: Vec<FormatToken> = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(open) = rest.find(MARKER) {
        literal.push_str(&rest[..open]);
        let after = &rest[open + MARKER.len_utf8()..];

        let placeholder = after.find(MARKER).and_then(|close| {
            after[..close]
                .parse::<Field>()
                .ok()
                .map(|field| (field, close))
        });

        match placeholder {
            Some((field, close)) => {
                flush_literal(&mut tokens, &mut literal);
                if let Some(FormatToken::Placeholder(prev)) = tokens.last() {
                    return Err(FormatError::Ambiguous {
                        first: *prev,
                        second: field,
                    });
                }
                tokens.push(FormatToken::Placeholder(field));
                rest = &after[close + MARKER.len_utf8()..];
            }
            None => {
                literal.push(MARKER);
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    flush_literal(&mut tokens, &mut literal);

    let format = FormatString {
        pattern: pattern.to_string(),
        tokens,
    };
    if format.fields().next().is_none() {
        return Err(FormatError::NoPlaceholders(pattern.to_string()));
    }
    Ok(format)
}

fn flush_literal(tokens: &mut Vec<FormatToken>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(FormatToken::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FormatToken::{Literal, Placeholder};

    fn lit(s: &str) -> FormatToken {
        Literal(s.to_string())
    }

    #[test]
    fn compiles_artist_title() {
        let f = compile("%artist%- %title%").unwrap();
        assert_eq!(
            f.tokens(),
            &[
                Placeholder(Field::Artist),
                lit("- "),
                Placeholder(Field::Title)
            ]
        );
        assert_eq!(f.pattern(), "%artist%- %title%");
    }

    #[test]
    fn names_are_case_insensitive() {
        let f = compile("%ALBUMARTIST% [%Year%]").unwrap();
        assert_eq!(
            f.tokens(),
            &[
                Placeholder(Field::AlbumArtist),
                lit(" ["),
                Placeholder(Field::Year),
                lit("]")
            ]
        );
    }

    #[test]
    fn rejects_adjacent_placeholders() {
        assert_eq!(
            compile("%artist%%title%"),
            Err(FormatError::Ambiguous {
                first: Field::Artist,
                second: Field::Title
            })
        );
    }

    #[test]
    fn unknown_name_degrades_to_literal() {
        let f = compile("%foo%title%").unwrap();
        // "%foo" is literal; the second marker then opens "%title%".
        assert_eq!(f.tokens(), &[lit("%foo"), Placeholder(Field::Title)]);
    }

    #[test]
    fn unterminated_marker_is_literal() {
        let f = compile("%track% 100%").unwrap();
        assert_eq!(f.tokens(), &[Placeholder(Field::Track), lit(" 100%")]);
    }

    #[test]
    fn unknown_name_between_placeholders_keeps_them_apart() {
        let f = compile("%artist%%x%%title%").unwrap();
        assert_eq!(
            f.tokens(),
            &[
                Placeholder(Field::Artist),
                lit("%x%"),
                Placeholder(Field::Title)
            ]
        );
    }

    #[test]
    fn pattern_without_placeholders_is_rejected() {
        assert!(matches!(
            compile("just text"),
            Err(FormatError::NoPlaceholders(_))
        ));
        assert!(matches!(compile(""), Err(FormatError::NoPlaceholders(_))));
    }

    #[test]
    fn from_str_and_display_round_trip() {
        let f: FormatString = "%track%. %title%".parse().unwrap();
        assert_eq!(f.to_string(), "%track%. %title%");
        assert_eq!(f.fields().collect::<Vec<_>>(), vec![Field::Track, Field::Title]);
    }
}
