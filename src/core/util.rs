//! core/util.rs
//! Small pure parsing helpers shared by matching and batch editing.

use super::error::ParseError;
use super::types::Field;

/// Parse an optional number for `field`.
/// - empty (after trim) -> Ok(None)
/// - number -> Ok(Some(number))
/// - garbage -> Err(ParseError)
///
/// Years are stored as a signed 32-bit frame value, so anything past `i32::MAX` is
/// rejected here rather than lost on write.
pub(crate) fn parse_number(field: Field, text: &str) -> Result<Option<u32>, ParseError> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    let invalid = || ParseError {
        field,
        text: t.to_string(),
    };
    let n = t.parse::<u32>().map_err(|_| invalid())?;
    if field == Field::Year && i32::try_from(n).is_err() {
        return Err(invalid());
    }
    Ok(Some(n))
}

/// Turn free text from a tag frame into a stored value: missing -> "".
pub(crate) fn text_or_empty(s: Option<&str>) -> String {
    s.map(str::to_owned).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_numbers() {
        assert_eq!(parse_number(Field::Year, ""), Ok(None));
        assert_eq!(parse_number(Field::Year, "  "), Ok(None));
        assert_eq!(parse_number(Field::Year, " 2001 "), Ok(Some(2001)));
        assert_eq!(
            parse_number(Field::Track, "-1"),
            Err(ParseError {
                field: Field::Track,
                text: "-1".to_string()
            })
        );
        assert!(parse_number(Field::Year, "abc").is_err());
    }

    #[test]
    fn year_must_fit_the_frame() {
        assert_eq!(parse_number(Field::Year, "2147483647"), Ok(Some(2_147_483_647)));
        assert_eq!(
            parse_number(Field::Year, "3000000000"),
            Err(ParseError {
                field: Field::Year,
                text: "3000000000".to_string()
            })
        );
        assert_eq!(parse_number(Field::Track, "3000000000"), Ok(Some(3_000_000_000)));
    }
}
