//! The reserved-word set, per `spec.md` §6 "Reserved-word set" and
//! `original_source/javapy/tokenize.py`'s `RESERVED_WORDS`.
//!
//! `yield` and the module-directive words (`module`, `requires`, `exports`,
//! `opens`, `uses`, `provides`, `to`, `with`, `open`, `transitive`) are
//! deliberately absent: real Java treats them as contextual/restricted
//! keywords, legal as ordinary identifiers outside specific syntactic
//! positions. They scan as plain `NAME` tokens; the parser recognises them
//! contextually via `at_name`/`accept_name`/`require_name`.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "if", "else", "for", "while", "do", "try", "catch", "finally", "synchronized", "throw",
        "return", "switch", "case", "default", "assert", "break", "continue",
        "void", "boolean", "byte", "short", "char", "int", "long", "float", "double",
        "class", "interface", "enum", "package", "import",
        "public", "private", "protected", "static", "final", "abstract", "transient", "volatile",
        "strictfp", "native", "extends", "implements", "throws", "instanceof",
        "true", "false", "null", "this", "super", "new",
    ]
    .into_iter()
    .collect()
});

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}
