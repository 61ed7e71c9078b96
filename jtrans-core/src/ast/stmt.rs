//! Statements, per `spec.md` §3 "Statements".

use crate::ast::common::VariableDeclaration;
use crate::ast::expr::{Expr, SwitchCase};
use crate::ast::types::Type;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatchClause {
    pub exception_types: Vec<Type>,
    pub name: String,
    pub body: Vec<Stmt>,
}

/// `EnhancedForControl.var` always has exactly one declarator with no
/// initializer (`spec.md` §3 invariant); enforced at construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnhancedForControl {
    pub var: VariableDeclaration,
    pub iterable: Box<Expr>,
}

impl EnhancedForControl {
    pub fn new(var: VariableDeclaration, iterable: Expr) -> Self {
        assert_eq!(var.declarators.len(), 1, "EnhancedForControl.var needs exactly one declarator");
        assert!(
            var.declarators[0].initializer.is_none(),
            "EnhancedForControl.var's declarator must have no initializer"
        );
        EnhancedForControl {
            var,
            iterable: Box::new(iterable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ForControl {
    Classic {
        init: Vec<Stmt>,
        cond: Option<Expr>,
        update: Vec<Expr>,
    },
    Enhanced(EnhancedForControl),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TryResource {
    pub declaration: Option<VariableDeclaration>,
    /// An existing-variable resource (`try (r) { ... }`), distinct from a
    /// freshly declared one.
    pub existing: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Stmt {
    Block(Vec<Stmt>),
    If {
        cond: Box<Expr>,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Box<Expr>,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        cond: Box<Expr>,
    },
    For {
        control: ForControl,
        body: Box<Stmt>,
    },
    Switch {
        discriminant: Box<Expr>,
        cases: Vec<SwitchCase>,
    },
    Synchronized {
        expr: Box<Expr>,
        body: Vec<Stmt>,
    },
    Try {
        resources: Vec<TryResource>,
        block: Vec<Stmt>,
        catches: Vec<CatchClause>,
        finally_block: Option<Vec<Stmt>>,
    },
    Throw(Box<Expr>),
    Return(Option<Box<Expr>>),
    Break(Option<String>),
    Continue(Option<String>),
    Yield(Box<Expr>),
    Assert {
        cond: Box<Expr>,
        message: Option<Box<Expr>>,
    },
    Labeled {
        label: String,
        body: Box<Stmt>,
    },
    Empty,
    Expression(Box<Expr>),
    VarDecl(VariableDeclaration),
}
