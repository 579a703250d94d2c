//! Error types for the resource parser

use fluent_syntax::parser::ParserError;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseErrors>;

/// A single syntax diagnostic with its byte range in the source
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Syntax error at {}..{}: {message}", .span.start, .span.end)]
pub struct ParseError {
    pub span: Range<usize>,
    pub message: String,
}

impl ParseError {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

impl From<&ParserError> for ParseError {
    fn from(error: &ParserError) -> Self {
        // The slice covers the whole junk entry, pos the offending character.
        let span = error.slice.clone().unwrap_or_else(|| error.pos.clone());
        Self::new(span, error.kind.to_string())
    }
}

/// Collection of errors from a parse attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
pub struct ParseErrors {
    pub errors: Vec<ParseError>,
}

impl ParseErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no syntax errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
        }
    }
}

impl From<&[ParserError]> for ParseErrors {
    fn from(errors: &[ParserError]) -> Self {
        Self {
            errors: errors.iter().map(ParseError::from).collect(),
        }
    }
}

/// Pretty-print errors with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_errors(source: &str, filename: &str, errors: &ParseErrors) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let mut output = Vec::new();

    for error in &errors.errors {
        // Diagnostics at end of input point one past the last byte.
        let end = char_offset(source, error.span.end);
        let start = char_offset(source, error.span.start).min(end);

        let report = Report::build(ReportKind::Error, filename, start)
            .with_message("Invalid Fluent syntax")
            .with_label(
                Label::new((filename, start..end))
                    .with_color(Color::Red)
                    .with_message(error.message.clone()),
            )
            .finish();

        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return errors.to_string();
        }
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// ariadne counts characters, the Fluent parser counts bytes.
#[cfg(feature = "pretty-errors")]
fn char_offset(source: &str, byte_offset: usize) -> usize {
    let byte_offset = byte_offset.min(source.len());
    source
        .get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset)
}

/// Plain fallback used when ariadne is compiled out
#[cfg(not(feature = "pretty-errors"))]
pub fn format_errors(_source: &str, filename: &str, errors: &ParseErrors) -> String {
    errors
        .iter()
        .map(|error| format!("{filename}: {error}"))
        .collect::<Vec<_>>()
        .join("\n")
}
