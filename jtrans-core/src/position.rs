//! Source positions and spans.
//!
//! Mirrors the teacher's `lex-parser/src/lex/ast/range.rs` `Position`/`Range`
//! pair, but additionally carries the full text of the line a position sits
//! on (as `spec.md` Position requires) since jtrans error messages quote the
//! offending line verbatim.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A single point in source: a 0-based line and column, plus the full text
/// of that line (shared, since many tokens on one line point at the same
/// text).
#[derive(Debug, Clone, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    #[serde(skip)]
    pub line_text: Rc<str>,
}

impl Position {
    pub fn new(line: usize, column: usize, line_text: Rc<str>) -> Self {
        Position {
            line,
            column,
            line_text,
        }
    }

    /// The origin position, used for synthetic nodes that have no source
    /// location (e.g. the sugar-expanded `List.of(...)` call).
    pub fn nopos() -> Self {
        Position::new(0, 0, Rc::from(""))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.column == other.column
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.line, self.column).cmp(&(other.line, other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open span between two positions in the same file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn nopos() -> Self {
        Span::new(Position::nopos(), Position::nopos())
    }

    /// True when `end` immediately follows `start` with no gap — used to
    /// decide whether two adjacent `>` tokens may be fused into `>>`/`>>>`.
    pub fn immediately_follows(&self, previous_end: &Position) -> bool {
        self.start.line == previous_end.line && self.start.column == previous_end.column
    }
}
