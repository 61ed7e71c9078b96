//! Shared AST building blocks: modifiers, annotations, and type parameters.
//!
//! Grounded in `original_source/javapy/tree.py`'s `Modifier`/`Annotation`/
//! `TypeParameter` node shapes.

use crate::ast::expr::Expr;
use crate::ast::types::Type;
use crate::qualified_name::QualifiedName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
    Transient,
    Volatile,
    Strictfp,
    Native,
    Synchronized,
    Default,
    Sealed,
    NonSealed,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Strictfp => "strictfp",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Default => "default",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "public" => Modifier::Public,
            "private" => Modifier::Private,
            "protected" => Modifier::Protected,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "abstract" => Modifier::Abstract,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "strictfp" => Modifier::Strictfp,
            "native" => Modifier::Native,
            "synchronized" => Modifier::Synchronized,
            "default" => Modifier::Default,
            _ => return None,
        })
    }
}

/// An annotation value: either a single expression, a nested annotation,
/// or a `{ ... }` array initialiser — per `spec.md` §4.3 "Annotations".
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnnotationValue {
    Expr(Expr),
    Nested(Annotation),
    Array(Vec<AnnotationValue>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnnotationArgs {
    None,
    Single(Box<AnnotationValue>),
    Named(Vec<(String, AnnotationValue)>),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    pub name: QualifiedName,
    pub args: AnnotationArgs,
}

/// `T` or `T extends Bound1 & Bound2`. `var` is rejected here at parse
/// time per `spec.md` §3 invariants.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<Type>,
    pub annotations: Vec<Annotation>,
}

/// A single `name [= initializer]` in a variable/field declarator list,
/// with C-style trailing `[]` folded into the type by the parser.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariableDeclarator {
    pub name: String,
    pub extra_dimensions: usize,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariableDeclaration {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub declarators: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    /// Panics on an empty declarator list — `spec.md` §3 invariant: "A
    /// VariableDeclaration and FieldDeclaration always have >=1 declarator."
    pub fn new(
        modifiers: Vec<Modifier>,
        annotations: Vec<Annotation>,
        ty: Type,
        declarators: Vec<VariableDeclarator>,
    ) -> Self {
        assert!(!declarators.is_empty(), "VariableDeclaration requires >=1 declarator");
        VariableDeclaration {
            modifiers,
            annotations,
            ty,
            declarators,
        }
    }
}
