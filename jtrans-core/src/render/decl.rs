//! Compilation-unit, type-declaration, and member rendering. Declarations
//! emit doc comment, then annotations (one per line), then modifiers in
//! source order, then the kind-specific form (`spec.md` §4.4).

use super::expr::render_args;
use super::pad;
use super::stmt::{render_braced_block, render_var_decl_inline};
use super::types::{render_annotations_inline, render_annotations_lines, render_modifiers, render_type, render_type_parameters};
use crate::ast::*;

pub(super) fn render_compilation_root(root: &CompilationRoot, unit: &str) -> String {
    match root {
        CompilationRoot::Unit(cu) => render_compilation_unit(cu, unit),
        CompilationRoot::Module(mu) => render_module_compilation_unit(mu, unit),
    }
}

fn render_compilation_unit(cu: &CompilationUnit, unit: &str) -> String {
    let mut sections = Vec::new();

    if let Some(pkg) = &cu.package {
        sections.push(render_package(pkg, unit));
    }
    if !cu.imports.is_empty() {
        sections.push(cu.imports.iter().map(|i| render_import(i)).collect::<Vec<_>>().join(""));
    }
    for ty in &cu.types {
        sections.push(render_type_decl(ty, 0, unit));
    }

    sections.join("\n")
}

fn render_module_compilation_unit(mu: &ModuleCompilationUnit, unit: &str) -> String {
    let mut sections = Vec::new();
    if !mu.imports.is_empty() {
        sections.push(mu.imports.iter().map(|i| render_import(i)).collect::<Vec<_>>().join(""));
    }

    let mut s = String::new();
    if let Some(doc) = &mu.doc {
        s.push_str(&render_doc_comment(doc, 0, unit));
    }
    s.push_str(&render_annotations_lines(&mu.annotations, 0, unit));
    if mu.open {
        s.push_str("open ");
    }
    s.push_str(&format!("module {} {{\n", mu.name.as_str()));
    for d in &mu.directives {
        s.push_str(&render_module_directive(d, 1, unit));
    }
    s.push_str("}\n");
    sections.push(s);

    sections.join("\n")
}

fn render_module_directive(d: &ModuleDirective, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    match d {
        ModuleDirective::Requires { name, modifiers, transitive } => {
            let mods = render_modifiers(modifiers);
            let transitive = if *transitive { "transitive " } else { "" };
            format!("{indent}requires {mods}{transitive}{};\n", name.as_str())
        }
        ModuleDirective::Exports { name, to } => format!("{indent}exports {}{};\n", name.as_str(), render_to_clause(to)),
        ModuleDirective::Opens { name, to } => format!("{indent}opens {}{};\n", name.as_str(), render_to_clause(to)),
        ModuleDirective::Uses { name } => format!("{indent}uses {};\n", name.as_str()),
        ModuleDirective::Provides { name, with } => {
            let names = with.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", ");
            format!("{indent}provides {} with {names};\n", name.as_str())
        }
    }
}

fn render_to_clause(to: &[QualifiedName]) -> String {
    if to.is_empty() {
        return String::new();
    }
    format!(" to {}", to.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", "))
}

fn render_package(pkg: &Package, unit: &str) -> String {
    let mut s = String::new();
    if let Some(doc) = &pkg.doc {
        s.push_str(&render_doc_comment(doc, 0, unit));
    }
    s.push_str(&render_annotations_lines(&pkg.annotations, 0, unit));
    s.push_str(&format!("package {};\n", pkg.name.as_str()));
    s
}

fn render_import(i: &Import) -> String {
    let static_kw = if i.is_static { "static " } else { "" };
    let wildcard = if i.wildcard { ".*" } else { "" };
    format!("import {static_kw}{}{wildcard};\n", i.name.as_str())
}

fn render_doc_comment(doc: &str, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let mut s = format!("{indent}/**\n");
    for line in doc.lines() {
        s.push_str(&format!("{indent} * {line}\n"));
    }
    s.push_str(&format!("{indent} */\n"));
    s
}

fn render_type_decl(ty: &TypeDecl, depth: usize, unit: &str) -> String {
    match ty {
        TypeDecl::Class(c) => render_class_decl(c, depth, unit),
        TypeDecl::Interface(i) => render_interface_decl(i, depth, unit),
        TypeDecl::Enum(e) => render_enum_decl(e, depth, unit),
        TypeDecl::AnnotationInterface(a) => render_annotation_interface_decl(a, depth, unit),
    }
}

fn render_header(header: &TypeHeader, depth: usize, unit: &str) -> String {
    let mut s = String::new();
    if let Some(doc) = &header.doc {
        s.push_str(&render_doc_comment(doc, depth, unit));
    }
    s.push_str(&render_annotations_lines(&header.annotations, depth, unit));
    s.push_str(&pad(depth, unit));
    s.push_str(&render_modifiers(&header.modifiers));
    s
}

fn render_class_decl(c: &ClassDecl, depth: usize, unit: &str) -> String {
    let mut s = render_header(&c.header, depth, unit);
    s.push_str(&format!("class {}{}", c.header.name, render_type_parameters(&c.header.type_params)));
    if let Some(sup) = &c.superclass {
        s.push_str(&format!(" extends {}", render_type(sup)));
    }
    if !c.interfaces.is_empty() {
        s.push_str(&format!(" implements {}", render_type_list(&c.interfaces)));
    }
    s.push(' ');
    s.push_str(&render_member_block(&c.members, depth, unit));
    s.push('\n');
    s
}

fn render_interface_decl(i: &InterfaceDecl, depth: usize, unit: &str) -> String {
    let mut s = render_header(&i.header, depth, unit);
    s.push_str(&format!("interface {}{}", i.header.name, render_type_parameters(&i.header.type_params)));
    if !i.extends.is_empty() {
        s.push_str(&format!(" extends {}", render_type_list(&i.extends)));
    }
    s.push(' ');
    s.push_str(&render_member_block(&i.members, depth, unit));
    s.push('\n');
    s
}

fn render_annotation_interface_decl(a: &AnnotationInterfaceDecl, depth: usize, unit: &str) -> String {
    let mut s = render_header(&a.header, depth, unit);
    s.push_str(&format!("@interface {} ", a.header.name));
    s.push_str(&render_member_block(&a.members, depth, unit));
    s.push('\n');
    s
}

fn render_enum_decl(e: &EnumDecl, depth: usize, unit: &str) -> String {
    let mut s = render_header(&e.header, depth, unit);
    s.push_str(&format!("enum {}", e.header.name));
    if !e.interfaces.is_empty() {
        s.push_str(&format!(" implements {}", render_type_list(&e.interfaces)));
    }
    s.push_str(" {\n");
    let inner = pad(depth + 1, unit);
    let constants = e
        .constants
        .iter()
        .map(|c| render_enum_constant(c, depth + 1, unit))
        .collect::<Vec<_>>()
        .join(",\n");
    s.push_str(&constants);
    if !e.members.is_empty() {
        s.push_str(";\n");
        for m in &e.members {
            s.push_str(&render_member(m, depth + 1, unit));
        }
    } else if !e.constants.is_empty() {
        s.push('\n');
    } else {
        s.push_str(&format!("{inner};\n"));
    }
    s.push_str(&pad(depth, unit));
    s.push_str("}\n");
    s
}

fn render_enum_constant(c: &EnumConstant, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let mut s = String::new();
    if let Some(doc) = &c.doc {
        s.push_str(&render_doc_comment(doc, depth, unit));
    }
    s.push_str(&render_annotations_lines(&c.annotations, depth, unit));
    s.push_str(&indent);
    s.push_str(&c.name);
    if !c.args.is_empty() {
        s.push_str(&format!("({})", render_args(&c.args, depth, unit)));
    }
    if let Some(body) = &c.anonymous_body {
        s.push(' ');
        s.push_str(&render_member_block(body, depth, unit));
    }
    s
}

fn render_type_list(types: &[Type]) -> String {
    types.iter().map(render_type).collect::<Vec<_>>().join(", ")
}

fn render_member_block(members: &[Member], depth: usize, unit: &str) -> String {
    if members.is_empty() {
        return "{}".to_string();
    }
    let mut s = String::from("{\n");
    for m in members {
        s.push_str(&render_member(m, depth + 1, unit));
    }
    s.push_str(&pad(depth, unit));
    s.push('}');
    s
}

/// Renders a member list inline for an anonymous class body embedded in an
/// expression (`new Foo() { ... }`).
pub(super) fn render_member_list_inline(members: &[Member], depth: usize, unit: &str) -> String {
    render_member_block(members, depth, unit)
}

fn render_member(m: &Member, depth: usize, unit: &str) -> String {
    match m {
        Member::Field(f) => render_field(f, depth, unit),
        Member::Function(f) => render_function(f, depth, unit),
        Member::Constructor(c) => render_constructor(c, depth, unit),
        Member::Initializer(i) => render_initializer(i, depth, unit),
        Member::AnnotationProperty(p) => render_annotation_property(p, depth, unit),
        Member::Type(t) => render_type_decl(t, depth, unit),
    }
}

fn render_field(f: &FieldDecl, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let mut s = String::new();
    if let Some(doc) = &f.doc {
        s.push_str(&render_doc_comment(doc, depth, unit));
    }
    s.push_str(&indent);
    s.push_str(&render_var_decl_inline(&f.declaration, depth, unit));
    s.push_str(";\n");
    s
}

fn render_function(f: &FunctionDecl, depth: usize, unit: &str) -> String {
    let mut s = render_member_header(&f.doc, &f.annotations, &f.modifiers, depth, unit);
    s.push_str(&render_type_parameters(&f.type_params));
    if !f.type_params.is_empty() {
        s.push(' ');
    }
    s.push_str(&format!("{} {}({})", render_type(&f.return_type), f.name, render_params(&f.params, depth, unit)));
    s.push_str(&render_throws(&f.throws));
    match &f.body {
        Some(body) => {
            s.push(' ');
            s.push_str(&render_braced_block(body, depth, unit));
            s.push('\n');
        }
        None => s.push_str(";\n"),
    }
    s
}

fn render_constructor(c: &ConstructorDecl, depth: usize, unit: &str) -> String {
    let mut s = render_member_header(&c.doc, &c.annotations, &c.modifiers, depth, unit);
    s.push_str(&render_type_parameters(&c.type_params));
    if !c.type_params.is_empty() {
        s.push(' ');
    }
    s.push_str(&format!("{}({})", c.name, render_params(&c.params, depth, unit)));
    s.push_str(&render_throws(&c.throws));
    s.push(' ');
    s.push_str(&render_braced_block(&c.body, depth, unit));
    s.push('\n');
    s
}

fn render_initializer(i: &InitializerBlock, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let static_kw = if i.is_static { "static " } else { "" };
    format!("{indent}{static_kw}{}\n", render_braced_block(&i.body, depth, unit))
}

fn render_annotation_property(p: &AnnotationProperty, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let mut s = String::new();
    if let Some(doc) = &p.doc {
        s.push_str(&render_doc_comment(doc, depth, unit));
    }
    s.push_str(&indent);
    s.push_str(&format!("{} {}()", render_type(&p.ty), p.name));
    if let Some(default) = &p.default {
        s.push_str(&format!(" default {}", super::types::render_annotation_value(default, depth, unit)));
    }
    s.push_str(";\n");
    s
}

fn render_member_header(doc: &Option<String>, annotations: &[Annotation], modifiers: &[Modifier], depth: usize, unit: &str) -> String {
    let mut s = String::new();
    if let Some(doc) = doc {
        s.push_str(&render_doc_comment(doc, depth, unit));
    }
    s.push_str(&render_annotations_lines(annotations, depth, unit));
    s.push_str(&pad(depth, unit));
    s.push_str(&render_modifiers(modifiers));
    s
}

fn render_params(params: &[Parameter], depth: usize, unit: &str) -> String {
    params
        .iter()
        .map(|p| {
            let annotations = render_annotations_inline(&p.annotations, depth, unit);
            let modifiers = render_modifiers(&p.modifiers);
            let ty = render_type(&p.ty);
            let varargs = if p.varargs { "..." } else { "" };
            format!("{annotations}{modifiers}{ty}{varargs} {}", p.name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_throws(throws: &[Type]) -> String {
    if throws.is_empty() {
        return String::new();
    }
    format!(" throws {}", render_type_list(throws))
}
