// src/readers/fields.rs

//! Field extraction for one line of an event log.
//!
//! A line is a whitespace-delimited tag followed by either
//! whitespace-delimited tokens:
//!
//! ```text
//! BeamType FarFieldPointSource 0 0
//! ```
//!
//! or `;`-delimited segments:
//!
//! ```text
//! HTsim 1;0.0;0.0;5.0;12.5;0.000001;7;9;
//! ```
//!
//! A [`TokenCursor`] consumes tokens; a [`SegmentCursor`] consumes segments.
//! Both return a [`FieldError`] for a missing or unparsable field so callers
//! may stop processing the remainder of the line with `?`.

use std::fmt;
use std::str::FromStr;

/// Delimiter of segments.
pub const SEGMENT_DELIMITER: char = ';';

/// Failure to extract one field of a line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
    /// No more tokens or segments remain on the line for the named field.
    Missing(&'static str),
    /// The text of the named field could not be parsed.
    Invalid(&'static str, String),
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            FieldError::Missing(name) => write!(f, "missing field {}", name),
            FieldError::Invalid(name, text) => write!(f, "invalid field {} {:?}", name, text),
        }
    }
}

/// Result of extracting one field.
pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Parse `text`, ignoring surrounding whitespace.
pub fn parse_field<T: FromStr>(
    name: &'static str,
    text: &str,
) -> FieldResult<T> {
    let trimmed = text.trim();
    match trimmed.parse::<T>() {
        Ok(val) => Ok(val),
        Err(_) => Err(FieldError::Invalid(name, trimmed.to_string())),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TokenCursor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Consumes whitespace-delimited tokens from the front of a line.
#[derive(Clone, Debug)]
pub struct TokenCursor<'a> {
    rest: &'a str,
}

impl<'a> TokenCursor<'a> {
    pub fn new(line: &'a str) -> TokenCursor<'a> {
        TokenCursor { rest: line }
    }

    /// Return the next token, or `None` if only whitespace remains.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            self.rest = s;
            return None;
        }
        let end: usize = s
            .find(char::is_whitespace)
            .unwrap_or(s.len());
        let (token, rest) = s.split_at(end);
        self.rest = rest;

        Some(token)
    }

    /// Return the next token as field `name`.
    pub fn next_field(
        &mut self,
        name: &'static str,
    ) -> FieldResult<&'a str> {
        self.next_token().ok_or(FieldError::Missing(name))
    }

    /// Return the next token parsed as field `name`.
    pub fn next_parsed<T: FromStr>(
        &mut self,
        name: &'static str,
    ) -> FieldResult<T> {
        let token = self.next_field(name)?;

        parse_field(name, token)
    }

    /// The unconsumed remainder of the line, including leading whitespace.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SegmentCursor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Consumes [`SEGMENT_DELIMITER`]-delimited segments from the front of a
/// line remainder.
///
/// A segment is the text up to the next delimiter, or up to the end of the
/// text if there is no further delimiter. Empty text after the final
/// delimiter is not a segment, so `"7;9;"` is the two segments `"7"` and
/// `"9"`. Empty text between two delimiters is an (empty) segment.
#[derive(Clone, Debug)]
pub struct SegmentCursor<'a> {
    rest: &'a str,
}

impl<'a> SegmentCursor<'a> {
    pub fn new(text: &'a str) -> SegmentCursor<'a> {
        SegmentCursor { rest: text }
    }

    /// Return the next segment, untrimmed, or `None` if no text remains.
    pub fn next_segment(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(SEGMENT_DELIMITER) {
            Some(at) => {
                let segment = &self.rest[..at];
                self.rest = &self.rest[at + SEGMENT_DELIMITER.len_utf8()..];
                Some(segment)
            }
            None => {
                let segment = self.rest;
                self.rest = "";
                Some(segment)
            }
        }
    }

    /// Return the next segment parsed as field `name`.
    pub fn next_parsed<T: FromStr>(
        &mut self,
        name: &'static str,
    ) -> FieldResult<T> {
        let segment = self.next_segment().ok_or(FieldError::Missing(name))?;

        parse_field(name, segment)
    }

    /// Have all segments been consumed?
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }
}
