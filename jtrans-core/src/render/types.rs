//! Type, modifier, and annotation rendering.

use super::pad;
use crate::ast::*;

pub(super) fn render_type(ty: &Type) -> String {
    match ty {
        Type::Primitive(p) => p.as_str().to_string(),
        Type::Void => "void".to_string(),
        Type::Var => "var".to_string(),
        Type::Generic { name, typeargs, container } => {
            let mut s = String::new();
            if let Some(c) = container {
                s.push_str(&render_type(c));
                s.push('.');
            }
            s.push_str(name.as_str());
            if let Some(args) = typeargs {
                s.push('<');
                s.push_str(&args.iter().map(render_type_argument).collect::<Vec<_>>().join(", "));
                s.push('>');
            }
            s
        }
        Type::Array { base, dimensions } => {
            format!("{}{}", render_type(base), "[]".repeat(*dimensions))
        }
        Type::Union(members) => members.iter().map(render_type).collect::<Vec<_>>().join(" | "),
        Type::Intersection(members) => members.iter().map(render_type).collect::<Vec<_>>().join(" & "),
    }
}

pub(super) fn render_type_argument(arg: &TypeArgument) -> String {
    match arg {
        TypeArgument::Type(t) => render_type(t),
        TypeArgument::Wildcard { extends: Some(t), .. } => format!("? extends {}", render_type(t)),
        TypeArgument::Wildcard { super_bound: Some(t), .. } => format!("? super {}", render_type(t)),
        TypeArgument::Wildcard { .. } => "?".to_string(),
    }
}

pub(super) fn render_type_parameters(params: &[TypeParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = params
        .iter()
        .map(|p| {
            if p.bounds.is_empty() {
                p.name.clone()
            } else {
                format!(
                    "{} extends {}",
                    p.name,
                    p.bounds.iter().map(render_type).collect::<Vec<_>>().join(" & ")
                )
            }
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

pub(super) fn render_modifiers(modifiers: &[Modifier]) -> String {
    if modifiers.is_empty() {
        return String::new();
    }
    let mut s = modifiers.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(" ");
    s.push(' ');
    s
}

/// One annotation per declaration line, space-separated for inline uses,
/// per `spec.md` §4.4; callers decide which joiner to use. Annotation
/// values are constant expressions, so nested indentation never matters in
/// practice, but `depth`/`unit` are threaded through anyway for the rare
/// array-valued annotation that spans visual structure.
pub(super) fn render_annotation(a: &Annotation, depth: usize, unit: &str) -> String {
    let mut s = format!("@{}", a.name.as_str());
    match &a.args {
        AnnotationArgs::None => {}
        AnnotationArgs::Single(v) => {
            s.push('(');
            s.push_str(&render_annotation_value(v, depth, unit));
            s.push(')');
        }
        AnnotationArgs::Named(pairs) => {
            s.push('(');
            s.push_str(
                &pairs
                    .iter()
                    .map(|(k, v)| format!("{k} = {}", render_annotation_value(v, depth, unit)))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            s.push(')');
        }
    }
    s
}

pub(super) fn render_annotation_value(v: &AnnotationValue, depth: usize, unit: &str) -> String {
    match v {
        AnnotationValue::Expr(e) => super::expr::render_expr(e, depth, unit),
        AnnotationValue::Nested(a) => render_annotation(a, depth, unit),
        AnnotationValue::Array(values) => {
            format!(
                "{{{}}}",
                values.iter().map(|v| render_annotation_value(v, depth, unit)).collect::<Vec<_>>().join(", ")
            )
        }
    }
}

/// One annotation per line, each indented at `depth` (`spec.md` §4.4).
pub(super) fn render_annotations_lines(annotations: &[Annotation], depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    annotations.iter().map(|a| format!("{indent}{}\n", render_annotation(a, depth, unit))).collect()
}

pub(super) fn render_annotations_inline(annotations: &[Annotation], depth: usize, unit: &str) -> String {
    if annotations.is_empty() {
        return String::new();
    }
    let mut s = annotations.iter().map(|a| render_annotation(a, depth, unit)).collect::<Vec<_>>().join(" ");
    s.push(' ');
    s
}
