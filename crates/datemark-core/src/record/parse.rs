//! Record line parsing.

use thiserror::Error;

use crate::notation::DateNotation;

const NAME_SEPARATOR: &str = ", ";

/// What was wrong with a record line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing ':' between date and names")]
    MissingSeparator,

    #[error("expected 3 date fields, found {found}")]
    MissingField { found: usize },

    #[error("invalid number '{field}'")]
    InvalidNumber { field: String },

    #[error("no entity names after ':'")]
    EmptyEntityList,

    #[error("empty entity name")]
    EmptyEntityName,
}

/// A malformed record line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Splits `A-B-C: n1, n2` into its notation and trimmed names.
///
/// Names are separated by `", "`; a bare comma is part of a name.
pub(crate) fn split_line(line: &str) -> Result<(DateNotation, Vec<&str>), ParseErrorKind> {
    let (date, names) = line
        .split_once(':')
        .ok_or(ParseErrorKind::MissingSeparator)?;
    let date = parse_notation(date.trim())?;

    let names = names.trim();
    if names.is_empty() {
        return Err(ParseErrorKind::EmptyEntityList);
    }
    let names = names
        .split(NAME_SEPARATOR)
        .map(str::trim)
        .map(|name| {
            if name.is_empty() {
                Err(ParseErrorKind::EmptyEntityName)
            } else {
                Ok(name)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((date, names))
}

/// Parses `A-B-C`. A `-` at the start of a field is a sign, not a separator,
/// so signed fields such as `-5--3-07` are accepted.
fn parse_notation(text: &str) -> Result<DateNotation, ParseErrorKind> {
    let mut fields: Vec<&str> = Vec::with_capacity(3);
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if ch == '-' && index > start {
            fields.push(&text[start..index]);
            start = index + 1;
        }
    }
    fields.push(&text[start..]);

    if fields.len() != 3 {
        return Err(ParseErrorKind::MissingField {
            found: fields.len(),
        });
    }

    let mut values = [0_i32; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        let field = field.trim();
        *value = field.parse().map_err(|_| ParseErrorKind::InvalidNumber {
            field: field.to_string(),
        })?;
    }

    Ok(DateNotation::new(values[0], values[1], values[2]))
}
