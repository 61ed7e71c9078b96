//! Statement rendering. Output is always brace-delimited regardless of
//! which surface the AST came from (`spec.md` §4.4), so a non-`Block` loop
//! or `if` body is wrapped in braces on the way out even when the source
//! never had any.

use super::expr::{render_args, render_expr};
use super::pad;
use super::types::{render_annotations_inline, render_modifiers, render_type};
use crate::ast::*;

pub(super) fn render_stmt(stmt: &Stmt, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    match stmt {
        Stmt::Block(stmts) => format!("{indent}{}\n", render_braced_block(stmts, depth, unit)),
        Stmt::If { cond, then_branch, else_branch } => {
            format!("{}\n", render_if(depth, unit, cond, then_branch, else_branch, true))
        }
        Stmt::While { cond, body } => {
            format!("{indent}while ({}) {}\n", render_expr(cond, depth, unit), render_body_as_block(body, depth, unit))
        }
        Stmt::DoWhile { body, cond } => {
            format!(
                "{indent}do {} while ({});\n",
                render_body_as_block(body, depth, unit),
                render_expr(cond, depth, unit)
            )
        }
        Stmt::For { control, body } => {
            let header = render_for_control(control, depth, unit);
            format!("{indent}{header} {}\n", render_body_as_block(body, depth, unit))
        }
        Stmt::Switch { discriminant, cases } => {
            let mut s = format!("{indent}switch ({}) {{\n", render_expr(discriminant, depth, unit));
            for case in cases {
                s.push_str(&render_switch_case(case, depth + 1, unit));
            }
            s.push_str(&indent);
            s.push_str("}\n");
            s
        }
        Stmt::Synchronized { expr, body } => {
            format!(
                "{indent}synchronized ({}) {}\n",
                render_expr(expr, depth, unit),
                render_braced_block(body, depth, unit)
            )
        }
        Stmt::Try { resources, block, catches, finally_block } => {
            render_try(resources, block, catches, finally_block, depth, unit)
        }
        Stmt::Throw(e) => format!("{indent}throw {};\n", render_expr(e, depth, unit)),
        Stmt::Return(e) => match e {
            Some(e) => format!("{indent}return {};\n", render_expr(e, depth, unit)),
            None => format!("{indent}return;\n"),
        },
        Stmt::Break(label) => match label {
            Some(l) => format!("{indent}break {l};\n"),
            None => format!("{indent}break;\n"),
        },
        Stmt::Continue(label) => match label {
            Some(l) => format!("{indent}continue {l};\n"),
            None => format!("{indent}continue;\n"),
        },
        Stmt::Yield(e) => format!("{indent}yield {};\n", render_expr(e, depth, unit)),
        Stmt::Assert { cond, message } => match message {
            Some(m) => format!("{indent}assert {} : {};\n", render_expr(cond, depth, unit), render_expr(m, depth, unit)),
            None => format!("{indent}assert {};\n", render_expr(cond, depth, unit)),
        },
        Stmt::Labeled { label, body } => format!("{indent}{label}:\n{}", render_stmt(body, depth, unit)),
        Stmt::Empty => format!("{indent};\n"),
        Stmt::Expression(e) => format!("{indent}{};\n", render_expr(e, depth, unit)),
        Stmt::VarDecl(decl) => format!("{indent}{};\n", render_var_decl_inline(decl, depth, unit)),
    }
}

/// Renders `stmt` as a `{ ... }` block suitable as the body of an `if`,
/// `while`, `for`, or `synchronized` — wrapping a bare non-`Block` body in
/// braces, since the output is always brace-delimited.
fn render_body_as_block(stmt: &Stmt, depth: usize, unit: &str) -> String {
    match stmt {
        Stmt::Block(stmts) => render_braced_block(stmts, depth, unit),
        other => render_braced_block(std::slice::from_ref(other), depth, unit),
    }
}

/// `{}` for an empty block, otherwise `{\n<body>\n<indent>}`, body at
/// `depth + 1`.
pub(super) fn render_braced_block(stmts: &[Stmt], depth: usize, unit: &str) -> String {
    if stmts.is_empty() {
        return "{}".to_string();
    }
    let mut s = String::from("{\n");
    for st in stmts {
        s.push_str(&render_stmt(st, depth + 1, unit));
    }
    s.push_str(&pad(depth, unit));
    s.push('}');
    s
}

/// Renders a lambda block body as a standalone multi-line string, used
/// where the block appears inline inside an expression rather than as a
/// statement's own body.
pub(super) fn render_block_inline(stmts: &[Stmt], depth: usize, unit: &str) -> String {
    render_braced_block(stmts, depth, unit)
}

/// `else if` chains stay on one line (`} else if (...) {`) rather than
/// nesting a fresh block, since the parser already represents an `else
/// if` as a direct, unwrapped `Stmt::If` rather than one wrapped in
/// `Stmt::Block` (`spec.md` §4.4).
fn render_if(
    depth: usize,
    unit: &str,
    cond: &Expr,
    then_branch: &Stmt,
    else_branch: &Option<Box<Stmt>>,
    with_indent: bool,
) -> String {
    let mut s = String::new();
    if with_indent {
        s.push_str(&pad(depth, unit));
    }
    s.push_str(&format!("if ({}) {}", render_expr(cond, depth, unit), render_body_as_block(then_branch, depth, unit)));
    if let Some(eb) = else_branch {
        s.push_str(" else ");
        match eb.as_ref() {
            Stmt::If { cond, then_branch, else_branch } => {
                s.push_str(&render_if(depth, unit, cond, then_branch, else_branch, false));
            }
            other => s.push_str(&render_body_as_block(other, depth, unit)),
        }
    }
    s
}

fn render_for_control(control: &ForControl, depth: usize, unit: &str) -> String {
    match control {
        ForControl::Classic { init, cond, update } => {
            let init_str = init.iter().map(|s| render_for_init_item(s, depth, unit)).collect::<Vec<_>>().join(", ");
            let cond_str = cond.as_ref().map(|c| render_expr(c, depth, unit)).unwrap_or_default();
            let update_str = update.iter().map(|u| render_expr(u, depth, unit)).collect::<Vec<_>>().join(", ");
            format!("for ({init_str}; {cond_str}; {update_str})")
        }
        ForControl::Enhanced(e) => {
            let modifiers = render_modifiers(&e.var.modifiers);
            let ty = render_type(&e.var.ty);
            let name = &e.var.declarators[0].name;
            format!("for ({modifiers}{ty} {name} : {})", render_expr(&e.iterable, depth, unit))
        }
    }
}

/// Items that may appear in a classic `for (...; ; )` init clause: either a
/// single declaration or a comma-separated list of expression statements.
fn render_for_init_item(stmt: &Stmt, depth: usize, unit: &str) -> String {
    match stmt {
        Stmt::VarDecl(decl) => render_var_decl_inline(decl, depth, unit),
        Stmt::Expression(e) => render_expr(e, depth, unit),
        other => render_stmt(other, depth, unit).trim().to_string(),
    }
}

pub(super) fn render_var_decl_inline(decl: &VariableDeclaration, depth: usize, unit: &str) -> String {
    let annotations = render_annotations_inline(&decl.annotations, depth, unit);
    let modifiers = render_modifiers(&decl.modifiers);
    let ty = render_type(&decl.ty);
    let declarators = decl.declarators.iter().map(|d| render_declarator(d, depth, unit)).collect::<Vec<_>>().join(", ");
    format!("{annotations}{modifiers}{ty} {declarators}")
}

fn render_declarator(d: &VariableDeclarator, depth: usize, unit: &str) -> String {
    let dims = "[]".repeat(d.extra_dimensions);
    match &d.initializer {
        Some(init) => format!("{}{dims} = {}", d.name, render_expr(init, depth, unit)),
        None => format!("{}{dims}", d.name),
    }
}

pub(super) fn render_switch_case(case: &SwitchCase, depth: usize, unit: &str) -> String {
    let indent = pad(depth, unit);
    let label = if case.is_default {
        "default".to_string()
    } else {
        format!("case {}", render_args(&case.labels, depth, unit))
    };
    if case.arrow {
        format!("{indent}{label} -> {}\n", render_arrow_case_body(&case.body, depth, unit))
    } else {
        let mut s = format!("{indent}{label}:\n");
        for st in &case.body {
            s.push_str(&render_stmt(st, depth + 1, unit));
        }
        s
    }
}

/// Arrow-case bodies render without braces for a single expression or
/// `throw`, with braces for a block body, and `{\n}` for an empty block
/// body (`spec.md` §4.4).
fn render_arrow_case_body(body: &[Stmt], depth: usize, unit: &str) -> String {
    match body.first() {
        Some(Stmt::Block(stmts)) if stmts.is_empty() => "{\n}".to_string(),
        Some(Stmt::Block(stmts)) => render_braced_block(stmts, depth, unit),
        Some(Stmt::Expression(e)) => format!("{};", render_expr(e, depth, unit)),
        Some(Stmt::Throw(e)) => format!("throw {};", render_expr(e, depth, unit)),
        // The grammar only ever parses an arrow-case body into zero
        // statements by way of an empty block (`parse_arrow_case_body`'s
        // expression/throw arms always push exactly one `Stmt`).
        None => "{\n}".to_string(),
    }
}

fn render_try(
    resources: &[TryResource],
    block: &[Stmt],
    catches: &[CatchClause],
    finally_block: &Option<Vec<Stmt>>,
    depth: usize,
    unit: &str,
) -> String {
    let indent = pad(depth, unit);
    let mut s = format!("{indent}try ");
    if !resources.is_empty() {
        s.push('(');
        s.push_str(&resources.iter().map(|r| render_try_resource(r, depth, unit)).collect::<Vec<_>>().join("; "));
        s.push_str(") ");
    }
    s.push_str(&render_braced_block(block, depth, unit));
    for c in catches {
        let types = c.exception_types.iter().map(render_type).collect::<Vec<_>>().join(" | ");
        s.push_str(&format!(" catch ({types} {}) {}", c.name, render_braced_block(&c.body, depth, unit)));
    }
    if let Some(fin) = finally_block {
        s.push_str(&format!(" finally {}", render_braced_block(fin, depth, unit)));
    }
    s.push('\n');
    s
}

fn render_try_resource(r: &TryResource, depth: usize, unit: &str) -> String {
    match (&r.declaration, &r.existing) {
        (Some(decl), _) => render_var_decl_inline(decl, depth, unit),
        (None, Some(e)) => render_expr(e, depth, unit),
        (None, None) => unreachable!("TryResource always has a declaration or an existing expression"),
    }
}
