//! The token buffer: a materialised, rewindable, markable view over the
//! scanner's output, per `spec.md` §4.2.
//!
//! Grounded in `original_source/javapy/util.py`'s `LookAheadListIterator`
//! (`push_marker`/`pop_marker(reset)`, and its context-manager sibling,
//! here expressed as [`TokenBuffer::speculate`]).

use crate::token::{Token, TokenKind};

/// A flat, indexable token sequence with nestable checkpoints.
///
/// `advance()` transparently skips `COMMENT` tokens, remembering the last
/// doc-comment (a `/** ... */` whose body doesn't start with an extra `/`)
/// seen since the previous declaration boundary, per `spec.md` §4.2 and §9
/// "Doc-comment attachment".
pub struct TokenBuffer {
    tokens: Vec<Token>,
    cursor: usize,
    marks: Vec<usize>,
    pending_doc: Option<String>,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenBuffer {
            tokens,
            cursor: 0,
            marks: Vec::new(),
            pending_doc: None,
        }
    }

    /// The token at `cursor + offset`, without skipping comments. Returns
    /// the final `ENDMARKER` token forever past the end.
    fn raw_peek(&self, offset: usize) -> &Token {
        let idx = (self.cursor + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Peek the `i`th non-comment token ahead (0 = the next token the
    /// parser would consume).
    pub fn peek(&self, i: usize) -> &Token {
        let mut seen = 0;
        let mut idx = self.cursor;
        loop {
            let tok = &self.tokens[idx.min(self.tokens.len() - 1)];
            if !matches!(tok.kind, TokenKind::Comment) {
                if seen == i {
                    return tok;
                }
                seen += 1;
            } else {
                self.note_doc_candidate(tok);
            }
            if idx + 1 < self.tokens.len() {
                idx += 1;
            } else {
                return tok;
            }
        }
    }

    fn note_doc_candidate(&self, _tok: &Token) {
        // Doc-comment capture happens destructively in `advance`, where we
        // hold `&mut self`; `peek` only needs to see past comments.
    }

    /// Consumes and returns the next non-comment token, updating the
    /// pending-doc-comment lookback as comments are skipped over.
    pub fn advance(&mut self) -> Token {
        loop {
            let tok = self.raw_peek(0).clone();
            self.cursor = (self.cursor + 1).min(self.tokens.len());
            if tok.kind == TokenKind::Comment {
                if let Some(doc) = extract_doc_comment(&tok.lexeme) {
                    self.pending_doc = Some(doc);
                }
                continue;
            }
            if !matches!(tok.kind, TokenKind::Nl) {
                return tok;
            }
        }
    }

    /// Takes (and clears) the pending doc comment, for attachment to the
    /// declaration the parser is about to build.
    pub fn take_doc(&mut self) -> Option<String> {
        self.pending_doc.take()
    }

    pub fn push_mark(&mut self) {
        self.marks.push(self.cursor);
    }

    /// Pops the innermost checkpoint. If `reset` is true, the cursor
    /// rewinds to where the checkpoint was pushed; otherwise the current
    /// position is kept (the speculative attempt succeeded).
    pub fn pop_mark(&mut self, reset: bool) {
        let mark = self.marks.pop().expect("pop_mark without matching push_mark");
        if reset {
            self.cursor = mark;
        }
    }

    /// Runs `f` inside a checkpoint; on `Err`, the buffer rewinds
    /// automatically, mirroring `LookAheadListIterator.__enter__`/
    /// `__exit__`'s exception-triggered reset.
    pub fn speculate<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        self.push_mark();
        match f(self) {
            Ok(v) => {
                self.pop_mark(false);
                Ok(v)
            }
            Err(e) => {
                self.pop_mark(true);
                Err(e)
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek(0).kind == TokenKind::EndMarker
    }
}

/// Extracts a doc comment's body from a `/** ... */` comment's raw lexeme,
/// returning `None` if it's a plain `/* */` or `//` comment, or a `/**/`-
/// style non-doc block comment (one whose content begins with an extra
/// `/`, e.g. `/**/`), per `spec.md` §4.1 "A doc-comment is any /** */ whose
/// content does not begin with /".
fn extract_doc_comment(lexeme: &str) -> Option<String> {
    let body = lexeme.strip_prefix("/**")?.strip_suffix("*/")?;
    if body.starts_with('/') {
        return None;
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use std::rc::Rc;

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        let pos = Position::new(0, 0, Rc::from(""));
        Token::new(kind, lexeme, pos.clone(), pos)
    }

    #[test]
    fn advance_skips_comments_and_captures_doc() {
        let mut buf = TokenBuffer::new(vec![
            tok(TokenKind::Comment, "/** hi */"),
            tok(TokenKind::Name, "Foo"),
            tok(TokenKind::EndMarker, ""),
        ]);
        let next = buf.advance();
        assert_eq!(next.kind, TokenKind::Name);
        assert_eq!(buf.take_doc().as_deref(), Some(" hi "));
    }

    #[test]
    fn speculate_resets_on_error() {
        let mut buf = TokenBuffer::new(vec![
            tok(TokenKind::Name, "a"),
            tok(TokenKind::Name, "b"),
            tok(TokenKind::EndMarker, ""),
        ]);
        let result: Result<(), &'static str> = buf.speculate(|b| {
            b.advance();
            Err("nope")
        });
        assert!(result.is_err());
        assert_eq!(buf.advance().lexeme, "a");
    }

    #[test]
    fn non_doc_block_comment_is_not_captured() {
        let mut buf = TokenBuffer::new(vec![
            tok(TokenKind::Comment, "/** /extra */"),
            tok(TokenKind::Name, "Foo"),
            tok(TokenKind::EndMarker, ""),
        ]);
        buf.advance();
        assert_eq!(buf.take_doc(), None);
    }
}
