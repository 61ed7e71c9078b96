//! Character classifiers and literal recognisers shared by [`super::Scanner`].
//!
//! The operator table and numeric-literal shapes are grounded in
//! `original_source/javapy/tokenize.py`'s `Operator`/`Number` regex
//! fragments (the `>>>=`, `>>>`, `::`, `&&`, `||`, `++`, `--` additions over
//! the host language's stock operator set, and the hex/bin/oct/float/
//! hexfloat literal shapes).

use super::Scanner;
use crate::token::TokenKind;

pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// If `chars` begins with a string-prefix combination (`r`, `R`, `b`, `B`,
/// `f`, `F`, in any order, at most one of each family) immediately followed
/// by a quote character, returns the prefix's length (not including the
/// quote). `spec.md` §4.1: "r/R (raw) prefixes, b/B (byte) prefixes, f/F
/// (interpolated), all combinations".
pub fn prefixed_quote_len(chars: &[char]) -> Option<usize> {
    let mut i = 0;
    let mut seen_raw = false;
    let mut seen_byte = false;
    let mut seen_f = false;
    while i < chars.len() && i < 2 {
        match chars[i] {
            'r' | 'R' if !seen_raw => {
                seen_raw = true;
                i += 1;
            }
            'b' | 'B' if !seen_byte => {
                seen_byte = true;
                i += 1;
            }
            'f' | 'F' if !seen_f => {
                seen_f = true;
                i += 1;
            }
            _ => break,
        }
    }
    if i > 0 && chars.get(i).is_some_and(|c| is_quote(*c)) {
        Some(i)
    } else {
        None
    }
}

pub fn looks_like_float(text: &str) -> bool {
    let t = text.trim_end_matches(['f', 'F', 'd', 'D']);
    if t.starts_with("0x") || t.starts_with("0X") {
        return t.contains('p') || t.contains('P') || (t.contains('.') && !t.ends_with('.'));
    }
    t.contains('.') || (text.ends_with(['f', 'F', 'd', 'D']) && !text.ends_with("L"))
}

/// Consumes a full numeric literal (decimal/hex/binary/octal, with
/// underscore separators, float/long suffixes, and hex-float exponents)
/// starting at the scanner's current position.
pub fn consume_number(s: &mut Scanner) {
    if s.peek() == Some('0') && matches!(s.peek_at(1), Some('x') | Some('X')) {
        s.bump();
        s.bump();
        consume_digits(s, |c| c.is_ascii_hexdigit());
        if s.peek() == Some('.') {
            s.bump();
            consume_digits(s, |c| c.is_ascii_hexdigit());
        }
        if matches!(s.peek(), Some('p') | Some('P')) {
            s.bump();
            if matches!(s.peek(), Some('+') | Some('-')) {
                s.bump();
            }
            consume_digits(s, |c| c.is_ascii_digit());
        }
        consume_suffix(s);
        return;
    }
    if s.peek() == Some('0') && matches!(s.peek_at(1), Some('b') | Some('B')) {
        s.bump();
        s.bump();
        consume_digits(s, |c| c == '0' || c == '1');
        consume_suffix(s);
        return;
    }
    if s.peek() == Some('0') && matches!(s.peek_at(1), Some('0'..='7')) {
        s.bump();
        consume_digits(s, |c| ('0'..='7').contains(&c));
        consume_suffix(s);
        return;
    }

    consume_digits(s, |c| c.is_ascii_digit());
    if s.peek() == Some('.') && s.peek_at(1).map(|c| c.is_ascii_digit()).unwrap_or(true) {
        s.bump();
        consume_digits(s, |c| c.is_ascii_digit());
    }
    if matches!(s.peek(), Some('e') | Some('E')) {
        s.bump();
        if matches!(s.peek(), Some('+') | Some('-')) {
            s.bump();
        }
        consume_digits(s, |c| c.is_ascii_digit());
    }
    consume_suffix(s);
}

fn consume_digits(s: &mut Scanner, pred: impl Fn(char) -> bool) {
    while let Some(c) = s.peek() {
        if pred(c) || c == '_' {
            s.bump();
        } else {
            break;
        }
    }
}

fn consume_suffix(s: &mut Scanner) {
    if matches!(s.peek(), Some('l') | Some('L') | Some('f') | Some('F') | Some('d') | Some('D')) {
        s.bump();
    }
}

/// Longest-match operator/punctuation recogniser. Order matters: longer
/// spellings must be tried before their prefixes.
///
/// `>>`/`>>>` are deliberately *not* in this table, unlike `>>=`/`>>>=`:
/// per `original_source/javapy/tokenize.py`'s `Operator` regex, only the
/// compound-assignment spellings are fused at the lexical level. A bare
/// `>>`/`>>>` is always scanned as two/three individual `>` (`Gt`) tokens;
/// the parser re-fuses them by position adjacency where a shift operator is
/// legal, and leaves them alone where they're really two/three generic-type
/// closes (`spec.md` §4.3/§8 "Generic call vs comparison").
pub fn match_operator(chars: &[char]) -> Option<(TokenKind, usize)> {
    const TABLE: &[(&str, TokenKind)] = &[
        (">>>=", TokenKind::CompoundAssign),
        (">>=", TokenKind::CompoundAssign),
        ("<<=", TokenKind::CompoundAssign),
        ("...", TokenKind::Ellipsis),
        ("->", TokenKind::Arrow),
        ("::", TokenKind::DoubleColon),
        ("&&", TokenKind::AndAnd),
        ("||", TokenKind::OrOr),
        ("++", TokenKind::PlusPlus),
        ("--", TokenKind::MinusMinus),
        ("==", TokenKind::Eq),
        ("!=", TokenKind::Ne),
        ("<=", TokenKind::Le),
        (">=", TokenKind::Ge),
        ("<<", TokenKind::Shl),
        ("+=", TokenKind::CompoundAssign),
        ("-=", TokenKind::CompoundAssign),
        ("*=", TokenKind::CompoundAssign),
        ("/=", TokenKind::CompoundAssign),
        ("%=", TokenKind::CompoundAssign),
        ("&=", TokenKind::CompoundAssign),
        ("|=", TokenKind::CompoundAssign),
        ("^=", TokenKind::CompoundAssign),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        (";", TokenKind::Semi),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("@", TokenKind::At),
        (":", TokenKind::Colon),
        ("?", TokenKind::Question),
        ("~", TokenKind::Tilde),
        ("=", TokenKind::Assign),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("!", TokenKind::Not),
        ("&", TokenKind::Amp),
        ("|", TokenKind::Pipe),
        ("^", TokenKind::Caret),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
    ];

    for (spelling, kind) in TABLE {
        let n = spelling.chars().count();
        if chars.len() >= n && chars[..n].iter().collect::<String>() == *spelling {
            return Some((*kind, n));
        }
    }
    None
}
