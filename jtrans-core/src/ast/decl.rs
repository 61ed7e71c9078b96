//! Compilation-level nodes, type declarations, and members, per
//! `spec.md` §3 "AST nodes".

use crate::ast::common::{Annotation, Modifier, TypeParameter, VariableDeclaration};
use crate::ast::stmt::Stmt;
use crate::ast::types::Type;
use crate::qualified_name::QualifiedName;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Package {
    pub name: QualifiedName,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Import {
    pub name: QualifiedName,
    pub is_static: bool,
    pub wildcard: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompilationUnit {
    pub package: Option<Package>,
    pub imports: Vec<Import>,
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ModuleDirective {
    Requires {
        name: QualifiedName,
        modifiers: Vec<Modifier>,
        transitive: bool,
    },
    Exports {
        name: QualifiedName,
        to: Vec<QualifiedName>,
    },
    Opens {
        name: QualifiedName,
        to: Vec<QualifiedName>,
    },
    Uses {
        name: QualifiedName,
    },
    Provides {
        name: QualifiedName,
        with: Vec<QualifiedName>,
    },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModuleCompilationUnit {
    pub name: QualifiedName,
    pub open: bool,
    pub directives: Vec<ModuleDirective>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    pub imports: Vec<Import>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CompilationRoot {
    Unit(CompilationUnit),
    Module(ModuleCompilationUnit),
}

/// Fields shared by `class`, `interface`, `enum`, and `@interface`
/// declarations, matching the teacher's practice of factoring common
/// declaration metadata (`lex-parser/src/lex/token/line.rs`'s shared
/// `LineToken` header fields) into one struct reused by each variant.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeHeader {
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassDecl {
    pub header: TypeHeader,
    pub superclass: Option<Type>,
    pub interfaces: Vec<Type>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterfaceDecl {
    pub header: TypeHeader,
    pub extends: Vec<Type>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnumConstant {
    pub name: String,
    pub args: Vec<crate::ast::expr::Expr>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    pub anonymous_body: Option<Vec<Member>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnumDecl {
    pub header: TypeHeader,
    pub interfaces: Vec<Type>,
    pub constants: Vec<EnumConstant>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnnotationInterfaceDecl {
    pub header: TypeHeader,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TypeDecl {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    AnnotationInterface(AnnotationInterfaceDecl),
}

impl TypeDecl {
    pub fn header(&self) -> &TypeHeader {
        match self {
            TypeDecl::Class(c) => &c.header,
            TypeDecl::Interface(i) => &i.header,
            TypeDecl::Enum(e) => &e.header,
            TypeDecl::AnnotationInterface(a) => &a.header,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub name: String,
    pub varargs: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDecl {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    pub type_params: Vec<TypeParameter>,
    pub return_type: Type,
    pub name: String,
    pub params: Vec<Parameter>,
    pub throws: Vec<Type>,
    /// `None` for an abstract/interface method with no body.
    pub body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    pub type_params: Vec<TypeParameter>,
    pub name: String,
    pub params: Vec<Parameter>,
    pub throws: Vec<Type>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldDecl {
    pub declaration: VariableDeclaration,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InitializerBlock {
    pub is_static: bool,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnnotationProperty {
    pub ty: Type,
    pub name: String,
    pub default: Option<crate::ast::common::AnnotationValue>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Function(FunctionDecl),
    Constructor(ConstructorDecl),
    Initializer(InitializerBlock),
    AnnotationProperty(AnnotationProperty),
    Type(Box<TypeDecl>),
}
