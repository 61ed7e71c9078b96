//! Error types for scanning and parsing.
//!
//! Hand-rolled `enum` + manual `Display`, in the teacher's style
//! (`lex-parser/src/lex/ast/error.rs`'s `ParserError`, and
//! `lex-parser/src/lex/lexing/transformations/semantic_indentation.rs`'s
//! `TransformationError`) rather than via `thiserror`, which the teacher
//! never depends on.

use crate::position::Position;
use std::fmt;

/// Scanner failure, per `spec.md` §4.1 "Failure modes" / §7.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    UnterminatedString { at: Position },
    UnterminatedComment { at: Position },
    InconsistentUnindent { at: Position },
    UnbalancedBracket { at: Position, found: char },
    NonEmptyScopeAtEof { at: Position, depth: usize },
    MalformedToken { at: Position, text: String },
}

impl ScanError {
    pub fn position(&self) -> &Position {
        match self {
            ScanError::UnterminatedString { at }
            | ScanError::UnterminatedComment { at }
            | ScanError::InconsistentUnindent { at }
            | ScanError::UnbalancedBracket { at, .. }
            | ScanError::NonEmptyScopeAtEof { at, .. }
            | ScanError::MalformedToken { at, .. } => at,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnterminatedString { at } => {
                write!(f, "EOF in multi-line string ({at})")
            }
            ScanError::UnterminatedComment { at } => {
                write!(f, "EOF in multi-line comment ({at})")
            }
            ScanError::InconsistentUnindent { at } => {
                write!(f, "unindent does not match any outer indentation level ({at})")
            }
            ScanError::UnbalancedBracket { at, found } => {
                write!(f, "unbalanced '{found}' ({at})")
            }
            ScanError::NonEmptyScopeAtEof { at, depth } => {
                write!(f, "{depth} scope(s) still open at end of file ({at})")
            }
            ScanError::MalformedToken { at, text } => {
                write!(f, "malformed token {text:?} ({at})")
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Parser failure, per `spec.md` §7.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub at: Position,
    /// Set when the failure happened while speculatively retrying inside a
    /// nested backtracking attempt; the outer caller compares depths and
    /// keeps whichever error reached furthest into the token stream, per
    /// `spec.md` §4.3 "Speculative failure chaining".
    pub chained_from: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, at: Position) -> Self {
        ParseError {
            message: message.into(),
            at,
            chained_from: None,
        }
    }

    pub fn expected(what: &str, got: &str, at: Position) -> Self {
        ParseError::new(format!("expected {what}, got {got}"), at)
    }

    /// Chain `self` in front of an error from a sibling speculative attempt,
    /// keeping whichever of the two reached the deeper token position. This
    /// is how "the user sees the best message rather than the first" is
    /// implemented (`spec.md` §7).
    pub fn chain(self, other: ParseError) -> ParseError {
        if other.at >= self.at {
            ParseError {
                chained_from: Some(Box::new(self)),
                ..other
            }
        } else {
            ParseError {
                chained_from: Some(Box::new(other)),
                ..self
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.at)?;
        if !self.at.line_text.trim().is_empty() {
            write!(f, "\n    {}", self.at.line_text.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The umbrella error returned by a full parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum JTransError {
    Scan(ScanError),
    Parse(ParseError),
}

impl JTransError {
    pub fn position(&self) -> &Position {
        match self {
            JTransError::Scan(e) => e.position(),
            JTransError::Parse(e) => &e.at,
        }
    }
}

impl fmt::Display for JTransError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JTransError::Scan(e) => write!(f, "{e}"),
            JTransError::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for JTransError {}

impl From<ScanError> for JTransError {
    fn from(e: ScanError) -> Self {
        JTransError::Scan(e)
    }
}

impl From<ParseError> for JTransError {
    fn from(e: ParseError) -> Self {
        JTransError::Parse(e)
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
pub type ParseResult<T> = Result<T, ParseError>;
