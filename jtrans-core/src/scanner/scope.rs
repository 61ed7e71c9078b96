//! The scanner's scope stack, grounded in
//! `original_source/javapy/tokenize.py`'s `Scope` enum and its push/pop
//! transitions on brackets and the `new`/`switch` keywords.

/// A single entry on the scanner's scope stack.
///
/// `Statement` is the default/outermost scope and is the only one that
/// triggers indentation handling; the bracket scopes suspend it; `New` and
/// `Switch` are transient markers tracking a constructor call or `switch`
/// header in progress so the scanner knows whether a following `{` starts
/// an anonymous body / switch body rather than a plain block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Statement,
    Paren,
    SqBracket,
    CBracket,
    New,
    Switch,
}

/// The scanner's scope stack. Always non-empty; starts (and, for a valid
/// program, ends) as `[Statement]`.
#[derive(Debug, Clone)]
pub struct ScopeStack(Vec<Scope>);

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack(vec![Scope::Statement])
    }

    pub fn top(&self) -> Scope {
        *self.0.last().expect("scope stack is never empty")
    }

    pub fn push(&mut self, scope: Scope) {
        self.0.push(scope);
    }

    /// Pop the top scope. Panics if it would empty the stack — callers are
    /// expected to check `len()` or `top()` first; an empty stack indicates
    /// a scanner bug, not a malformed-input condition (those are reported
    /// via `ScanError::UnbalancedBracket` before popping is attempted).
    pub fn pop(&mut self) -> Scope {
        assert!(self.0.len() > 1, "cannot pop the base Statement scope");
        self.0.pop().unwrap()
    }

    /// Pop the top scope only if it equals `expected`; used at bracket
    /// close sites where a mismatch means unbalanced input.
    pub fn pop_if(&mut self, expected: Scope) -> bool {
        if self.top() == expected {
            self.0.pop();
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty_of_extras(&self) -> bool {
        self.0.len() == 1 && self.0[0] == Scope::Statement
    }

    /// Positional access for the scanner's `new`-under-`[`/`{` lookback
    /// rules, which need to inspect scopes other than the top.
    pub fn as_slice(&self) -> &[Scope] {
        &self.0
    }

    /// Removes the scope at `idx` without disturbing the rest of the
    /// stack's order, used to drop a `New` marker that an array-creation
    /// `[` has just shadowed (`spec.md` §4.1).
    pub fn remove_at(&mut self, idx: usize) {
        self.0.remove(idx);
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}
