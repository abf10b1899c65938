//! Line parser for the Unicode `confusables.txt` data format.
//!
//! A data line has three `;`-separated fields, the last of which carries a
//! type tag and a `#` comment with a human-readable description:
//!
//! ```text
//! 0406 ;	006C ;	MA	# ( І → l ) CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I → LATIN SMALL LETTER L	#
//! ```
//!
//! The same format is used by the local amendments file. This module is also
//! compiled into `build.rs`, so it must not depend on anything else in the
//! crate.

use memchr::memchr;
use std::fmt;
use thiserror::Error;

const ARROW: &str = " → ";
const BOM: char = '\u{FEFF}';

/// Human-readable names of a mapping's source and target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description {
    pub from: String,
    pub to: String,
}

impl Description {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// One parsed data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusableEntry {
    /// First code point of the source field.
    pub source: char,
    /// All target code points, concatenated.
    pub target: String,
    pub description: Description,
}

/// Successful outcome of [`parse_line`].
///
/// `Skip` covers blank lines, comments and anything else that is not a data
/// line. It is not an error and must never abort a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(ConfusableEntry),
    Skip,
}

impl ParsedLine {
    #[inline]
    pub fn is_skip(&self) -> bool {
        matches!(self, ParsedLine::Skip)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing `{0}` field")]
    MissingField(&'static str),

    #[error("`{field}` field contains invalid hex `{value}`")]
    InvalidHex { field: &'static str, value: String },

    #[error("`{field}` field value `{value}` is not a Unicode scalar value")]
    InvalidCodePoint { field: &'static str, value: String },

    #[error("comment does not contain a `from → to` description")]
    MissingDescription,
}

/// Parse a single line of a mapping file.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim_start_matches(BOM).trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Skip);
    }

    // No delimiter at all: prose or stray text, not a malformed data line.
    let Some(first) = memchr(b';', line.as_bytes()) else {
        return Ok(ParsedLine::Skip);
    };
    let source_field = &line[..first];
    let rest = &line[first + 1..];

    let second = memchr(b';', rest.as_bytes()).ok_or(ParseError::MissingField("target"))?;
    let target_field = &rest[..second];
    let tail = &rest[second + 1..];

    let hash = memchr(b'#', tail.as_bytes()).ok_or(ParseError::MissingField("comment"))?;
    let comment = &tail[hash + 1..];

    let source = parse_code_points("source", source_field)?
        .chars()
        .next()
        .ok_or(ParseError::MissingField("source"))?;
    let target = parse_code_points("target", target_field)?;
    let description = parse_description(comment, source, &target)?;

    Ok(ParsedLine::Entry(ConfusableEntry {
        source,
        target,
        description,
    }))
}

/// Space-separated hex code points → concatenated string.
fn parse_code_points(field: &'static str, text: &str) -> Result<String, ParseError> {
    let mut out = String::new();
    for token in text.split_whitespace() {
        let cp = u32::from_str_radix(token, 16).map_err(|_| ParseError::InvalidHex {
            field,
            value: token.to_owned(),
        })?;
        let c = char::from_u32(cp).ok_or_else(|| ParseError::InvalidCodePoint {
            field,
            value: token.to_owned(),
        })?;
        out.push(c);
    }
    if out.is_empty() {
        return Err(ParseError::MissingField(field));
    }
    Ok(out)
}

fn parse_description(comment: &str, source: char, target: &str) -> Result<Description, ParseError> {
    // `#*` marks characters outside the identifier profile.
    let comment = comment.strip_prefix('*').unwrap_or(comment).trim_start();
    let names = strip_glyphs(comment, source, target).ok_or(ParseError::MissingDescription)?;

    let (from, to) = names
        .split_once(ARROW)
        .ok_or(ParseError::MissingDescription)?;
    let to = match memchr(b'#', to.as_bytes()) {
        Some(end) => &to[..end],
        None => to,
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(ParseError::MissingDescription);
    }
    Ok(Description::new(from, to))
}

/// Drop the leading `( <source> → <target> )` glyph group.
///
/// Glyphs may themselves be `(`, `)`, `→` or `#`, so the exact rendering of
/// the parsed code points is tried first. Character names never contain
/// parentheses, which makes the first `") "` a safe fallback boundary.
fn strip_glyphs<'a>(comment: &'a str, source: char, target: &str) -> Option<&'a str> {
    let exact = comment
        .strip_prefix("( ")
        .and_then(|c| c.strip_prefix(source))
        .and_then(|c| c.strip_prefix(ARROW))
        .and_then(|c| c.strip_prefix(target))
        .and_then(|c| c.strip_prefix(" )"));
    if exact.is_some() {
        return exact;
    }

    match comment.strip_prefix('(') {
        Some(inner) => inner.find(") ").map(|end| &inner[end + 2..]),
        None => Some(comment),
    }
}
