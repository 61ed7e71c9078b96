//! Dotted identifiers (`a.b.c`), used for package names, import targets,
//! module directive targets, and simple names alike.
//!
//! Grounded in `original_source/javapy/tree.py`'s `Name` (a `str` subclass
//! validated against an identifier regex) and the teacher's `QualifiedName`-
//! shaped helpers in `lex-parser/src/lex/ast/text_content.rs`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static QUALIFIED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap());

/// A validated dotted identifier, e.g. `java.util.List` or a bare `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Construct a `QualifiedName`, panicking if `s` isn't a syntactically
    /// valid dotted identifier. The scanner/parser only ever construct these
    /// from already-validated `NAME` tokens, so this is a precondition
    /// violation (per `spec.md` §7), not a recoverable error.
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        assert!(
            QUALIFIED_NAME_RE.is_match(&s),
            "invalid qualified name: {s:?}"
        );
        QualifiedName(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self.suffix` as a new qualified name, e.g. `a.b` + `c` -> `a.b.c`.
    pub fn join(&self, suffix: &str) -> Self {
        QualifiedName::new(format!("{}.{}", self.0, suffix))
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0 == prefix || self.0.starts_with(&format!("{prefix}."))
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0 == suffix || self.0.ends_with(&format!(".{suffix}"))
    }

    /// The last dot-separated segment, e.g. `List` for `java.util.List`.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// All segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    pub fn is_simple(&self) -> bool {
        !self.0.contains('.')
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        QualifiedName::new(s)
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        QualifiedName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_and_simple_names() {
        assert_eq!(QualifiedName::new("com.test").as_str(), "com.test");
        assert_eq!(QualifiedName::new("x").as_str(), "x");
    }

    #[test]
    fn join_appends_a_segment() {
        let n = QualifiedName::new("a.b");
        assert_eq!(n.join("c").as_str(), "a.b.c");
    }

    #[test]
    fn prefix_and_suffix_checks_are_segment_aware() {
        let n = QualifiedName::new("a.b.c");
        assert!(n.starts_with("a.b"));
        assert!(!n.starts_with("a.bc"));
        assert!(n.ends_with("c"));
        assert!(!n.ends_with("b.cd"));
    }

    #[test]
    #[should_panic]
    fn rejects_invalid_names() {
        QualifiedName::new("1bad.name");
    }
}
