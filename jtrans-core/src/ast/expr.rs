//! Expressions, per `spec.md` §3 "Expressions" and `original_source/javapy/tree.py`'s
//! expression node family.

use crate::ast::common::Annotation;
use crate::ast::stmt::Stmt;
use crate::ast::types::{Type, TypeArgument};
use crate::qualified_name::QualifiedName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;
        match self {
            Or => "||",
            And => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Eq => "==",
            Ne => "!=",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
        }
    }
}

/// The authoritative unary operator set, from `original_source/javapy/tree.py`'s
/// `UnaryExpression.OPS`: `+, -, ~, !`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    BitNot,
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IncDecOp {
    Inc,
    Dec,
}

/// The authoritative compound-assignment operator set, from
/// `original_source/javapy/tree.py`'s `Assignment.OPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        use AssignOp::*;
        match self {
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            RemAssign => "%=",
            AndAssign => "&=",
            OrAssign => "|=",
            XorAssign => "^=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            UShrAssign => ">>>=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NumericLiteral {
    pub text: String,
    pub is_float: bool,
}

/// A single segment of an f-string literal, re-emitted verbatim by the
/// renderer (`spec.md` §4.4 "F-string segments re-emit the original
/// literal form").
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FStringPart {
    Literal(String),
    Hole(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LambdaParam {
    pub name: String,
    pub ty: Option<Type>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LambdaBody {
    Expr(Box<Expr>),
    Block(Vec<Stmt>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwitchCase {
    pub labels: Vec<Expr>,
    pub is_default: bool,
    pub arrow: bool,
    /// Classic (`case L:`) bodies hold an arbitrary statement list.
    /// Arrow bodies hold exactly one element: an expression statement, a
    /// block, or a throw (`spec.md` §3 invariant).
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwitchExpr {
    pub discriminant: Box<Expr>,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnonymousBody {
    pub members: Vec<crate::ast::decl::Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    IntLiteral(NumericLiteral),
    FloatLiteral(NumericLiteral),
    StringLiteral(String),
    CharLiteral(String),
    BoolLiteral(bool),
    NullLiteral,
    /// `T.class`, `int.class`, `void.class`.
    ClassLiteral(Type),
    FString(Vec<FStringPart>),

    Name(QualifiedName),
    This,
    Super,
    QualifiedThis(QualifiedName),
    QualifiedSuper(QualifiedName),

    MemberAccess {
        object: Box<Expr>,
        name: String,
    },
    FunctionCall {
        object: Option<Box<Expr>>,
        type_args: Option<Vec<TypeArgument>>,
        name: String,
        args: Vec<Expr>,
    },
    MethodReference {
        object: Box<Expr>,
        name: String,
    },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    PreIncDec {
        op: IncDecOp,
        operand: Box<Expr>,
    },
    PostIncDec {
        op: IncDecOp,
        operand: Box<Expr>,
    },
    Cast {
        ty: Type,
        expr: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Assignment {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    InstanceOf {
        expr: Box<Expr>,
        ty: Type,
        binding: Option<String>,
    },

    Lambda {
        params: Vec<LambdaParam>,
        body: LambdaBody,
    },

    ClassCreator {
        ty: Type,
        args: Vec<Expr>,
        anonymous_body: Option<AnonymousBody>,
        qualifier: Option<Box<Expr>>,
    },
    ArrayCreator {
        elem_type: Type,
        /// One entry per explicit `[expr]` dimension, outer to inner.
        dimension_exprs: Vec<Expr>,
        /// Additional `[]` with no size expression, outer to inner, after
        /// the sized dimensions.
        extra_dimensions: usize,
        initializer: Option<Vec<Expr>>,
    },
    ArrayInit(Vec<Expr>),

    Switch(SwitchExpr),
    Paren(Box<Expr>),

    Annotation(Annotation),
}
