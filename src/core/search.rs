//! core/search.rs
//! Filter records with a search query.
//!
//! Two forms, both case-insensitive:
//! - plain text: substring of the filename (empty matches everything)
//! - advanced, starting with `!`: `!artist="daft punk";year="2001"`
//!
//! In advanced form every criterion must hold. A value compares equal to the whole
//! field, so `!genre=""` finds files without a genre. `year` and `track` values must
//! be numbers (or empty, meaning "not set").

use std::str::FromStr;

use super::error::SearchError;
use super::types::{Field, MetadataRecord};
use super::util::parse_number;

pub const ADVANCED_PREFIX: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Lowercased filename substring.
    Filename(String),
    Advanced(Vec<Criterion>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub field: Field,
    pub expected: Expected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Lowercased.
    Text(String),
    Number(Option<u32>),
}

impl FromStr for Query {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub fn parse(query: &str) -> Result<Query, SearchError> {
    let Some(body) = query.strip_prefix(ADVANCED_PREFIX) else {
        return Ok(Query::Filename(query.to_lowercase()));
    };

    let mut criteria = Vec::new();
    let mut rest = body.trim();
    while !rest.is_empty() {
        let (criterion, after) = parse_criterion(rest)?;
        criteria.push(criterion);

        let after = after.trim_start();
        rest = match after.strip_prefix(';') {
            Some(next) => next.trim_start(),
            None if after.is_empty() => after,
            None => return Err(SearchError::Syntax(after.to_string())),
        };
    }

    if criteria.is_empty() {
        return Err(SearchError::Empty);
    }
    Ok(Query::Advanced(criteria))
}

/// `name="value"` at the start of `s`. Returns the criterion and the unparsed tail.
fn parse_criterion(s: &str) -> Result<(Criterion, &str), SearchError> {
    let syntax = || {
        let term = s
            .split(';')
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(s.trim());
        SearchError::Syntax(term.to_string())
    };

    let (name, after_eq) = s.split_once('=').ok_or_else(syntax)?;
    let name = name.trim();
    let field: Field = name
        .parse()
        .map_err(|_| SearchError::UnknownProperty(name.to_string()))?;

    let quoted = after_eq.trim_start().strip_prefix('"').ok_or_else(syntax)?;
    let (value, after) = quoted.split_once('"').ok_or_else(syntax)?;

    let expected = if field.is_numeric() {
        let n = parse_number(field, value).map_err(|_| SearchError::NotANumber {
            field,
            value: value.to_string(),
        })?;
        Expected::Number(n)
    } else {
        Expected::Text(value.to_lowercase())
    };

    Ok((Criterion { field, expected }, after))
}

impl Query {
    pub fn matches(&self, record: &MetadataRecord) -> bool {
        match self {
            Query::Filename(needle) => {
                needle.is_empty() || record.filename().to_lowercase().contains(needle.as_str())
            }
            Query::Advanced(criteria) => criteria.iter().all(|c| c.matches(record)),
        }
    }
}

impl Criterion {
    /// `filename` accepts the name with or without its extension.
    pub fn matches(&self, record: &MetadataRecord) -> bool {
        match (&self.expected, self.field) {
            (Expected::Number(n), field) => record.tags.number(field) == *n,
            (Expected::Text(want), Field::Filename) => {
                record.filename().to_lowercase() == *want
                    || record.filename_stem().to_lowercase() == *want
            }
            (Expected::Text(want), field) => {
                record.tags.text(field).unwrap_or_default().to_lowercase() == *want
            }
        }
    }
}
