//! Expression rendering. The AST carries an explicit `Paren` node for every
//! parenthesis the source actually wrote, so rendering never has to
//! reconstruct precedence — it only ever re-emits what `Paren` already
//! recorded (`spec.md` §9 "closed sum type, no synthesized parens").
//!
//! Most expressions render on one line, but a few (lambda blocks, switch
//! expressions, anonymous class bodies) embed a statement list, so `depth`
//! and `unit` are threaded through to keep that nested text indented
//! relative to the statement the expression sits in.

use super::pad;
use super::types::{render_type, render_type_argument};
use crate::ast::*;

pub(super) fn render_expr(e: &Expr, depth: usize, unit: &str) -> String {
    match e {
        Expr::IntLiteral(n) | Expr::FloatLiteral(n) => n.text.clone(),
        Expr::StringLiteral(s) => s.clone(),
        Expr::CharLiteral(s) => s.clone(),
        Expr::BoolLiteral(b) => b.to_string(),
        Expr::NullLiteral => "null".to_string(),
        Expr::ClassLiteral(ty) => format!("{}.class", render_type(ty)),
        Expr::FString(parts) => parts.iter().map(|p| render_fstring_part(p, depth, unit)).collect(),

        Expr::Name(n) => n.as_str().to_string(),
        Expr::This => "this".to_string(),
        Expr::Super => "super".to_string(),
        Expr::QualifiedThis(n) => format!("{}.this", n.as_str()),
        Expr::QualifiedSuper(n) => format!("{}.super", n.as_str()),

        Expr::MemberAccess { object, name } => format!("{}.{}", render_expr(object, depth, unit), name),
        Expr::FunctionCall { object, type_args: _, name, args } if name == "[]" => {
            let obj = object.as_ref().expect("index access always has a receiver");
            format!("{}[{}]", render_expr(obj, depth, unit), render_args(args, depth, unit))
        }
        Expr::FunctionCall { object, type_args, name, args } => {
            let witness = render_type_witness(type_args.as_deref());
            match object {
                Some(obj) => {
                    format!("{}.{witness}{}({})", render_expr(obj, depth, unit), name, render_args(args, depth, unit))
                }
                None => format!("{witness}{}({})", name, render_args(args, depth, unit)),
            }
        }
        Expr::MethodReference { object, name } => format!("{}::{}", render_expr(object, depth, unit), name),

        Expr::Binary { op, left, right } => {
            format!("{} {} {}", render_expr(left, depth, unit), op.as_str(), render_expr(right, depth, unit))
        }
        Expr::Unary { op, operand } => format!("{}{}", op.as_str(), render_expr(operand, depth, unit)),
        Expr::PreIncDec { op, operand } => format!("{}{}", inc_dec_str(*op), render_expr(operand, depth, unit)),
        Expr::PostIncDec { op, operand } => format!("{}{}", render_expr(operand, depth, unit), inc_dec_str(*op)),
        Expr::Cast { ty, expr } => format!("({}) {}", render_type(ty), render_expr(expr, depth, unit)),
        Expr::Conditional { cond, then_branch, else_branch } => format!(
            "{} ? {} : {}",
            render_expr(cond, depth, unit),
            render_expr(then_branch, depth, unit),
            render_expr(else_branch, depth, unit)
        ),
        Expr::Assignment { op, target, value } => {
            format!("{} {} {}", render_expr(target, depth, unit), op.as_str(), render_expr(value, depth, unit))
        }
        Expr::InstanceOf { expr, ty, binding } => match binding {
            Some(name) => format!("{} instanceof {} {}", render_expr(expr, depth, unit), render_type(ty), name),
            None => format!("{} instanceof {}", render_expr(expr, depth, unit), render_type(ty)),
        },

        Expr::Lambda { params, body } => render_lambda(params, body, depth, unit),

        Expr::ClassCreator { ty, args, anonymous_body, qualifier } => {
            let base = format!("new {}({})", render_type(ty), render_args(args, depth, unit));
            let with_body = match anonymous_body {
                Some(body) => format!("{} {}", base, render_anonymous_body(body, depth, unit)),
                None => base,
            };
            match qualifier {
                Some(q) => format!("{}.{}", render_expr(q, depth, unit), with_body),
                None => with_body,
            }
        }
        Expr::ArrayCreator { elem_type, dimension_exprs, extra_dimensions, initializer } => {
            render_array_creator(elem_type, dimension_exprs, *extra_dimensions, initializer, depth, unit)
        }
        Expr::ArrayInit(elems) => render_array_init(elems, depth, unit),

        Expr::Switch(sw) => render_switch_expr(sw, depth, unit),
        Expr::Paren(inner) => format!("({})", render_expr(inner, depth, unit)),

        Expr::Annotation(a) => super::types::render_annotation(a, depth, unit),
    }
}

fn inc_dec_str(op: IncDecOp) -> &'static str {
    match op {
        IncDecOp::Inc => "++",
        IncDecOp::Dec => "--",
    }
}

pub(super) fn render_args(args: &[Expr], depth: usize, unit: &str) -> String {
    args.iter().map(|a| render_expr(a, depth, unit)).collect::<Vec<_>>().join(", ")
}

/// `object.<Type>method(args)`'s explicit type witness, rendered
/// immediately before the method name (empty string when the call didn't
/// have one).
fn render_type_witness(type_args: Option<&[TypeArgument]>) -> String {
    match type_args {
        Some(args) => format!("<{}>", args.iter().map(render_type_argument).collect::<Vec<_>>().join(", ")),
        None => String::new(),
    }
}

/// F-string segments re-emit the original literal form verbatim
/// (`spec.md` §4.4); only the interpolated holes are re-rendered.
fn render_fstring_part(part: &FStringPart, depth: usize, unit: &str) -> String {
    match part {
        FStringPart::Literal(text) => text.clone(),
        FStringPart::Hole(e) => format!("%{{{}}}", render_expr(e, depth, unit)),
    }
}

fn render_lambda(params: &[LambdaParam], body: &LambdaBody, depth: usize, unit: &str) -> String {
    let params_str = if params.len() == 1 && params[0].ty.is_none() {
        params[0].name.clone()
    } else {
        let inner = params
            .iter()
            .map(|p| match &p.ty {
                Some(t) => format!("{} {}", render_type(t), p.name),
                None => p.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("({inner})")
    };
    let body_str = match body {
        LambdaBody::Expr(e) => render_expr(e, depth, unit),
        LambdaBody::Block(stmts) => super::stmt::render_braced_block(stmts, depth, unit),
    };
    format!("{params_str} -> {body_str}")
}

fn render_anonymous_body(body: &AnonymousBody, depth: usize, unit: &str) -> String {
    super::decl::render_member_list_inline(&body.members, depth, unit)
}

fn render_array_creator(
    elem_type: &Type,
    dimension_exprs: &[Expr],
    extra_dimensions: usize,
    initializer: &Option<Vec<Expr>>,
    depth: usize,
    unit: &str,
) -> String {
    let mut s = format!("new {}", render_type(elem_type));
    for d in dimension_exprs {
        s.push('[');
        s.push_str(&render_expr(d, depth, unit));
        s.push(']');
    }
    s.push_str(&"[]".repeat(extra_dimensions));
    if let Some(init) = initializer {
        s.push(' ');
        s.push_str(&render_array_init(init, depth, unit));
    }
    s
}

fn render_array_init(elems: &[Expr], depth: usize, unit: &str) -> String {
    if elems.is_empty() {
        return "{}".to_string();
    }
    format!("{{{}}}", render_args(elems, depth, unit))
}

fn render_switch_expr(sw: &SwitchExpr, depth: usize, unit: &str) -> String {
    let mut s = format!("switch ({}) {{\n", render_expr(&sw.discriminant, depth, unit));
    for case in &sw.cases {
        s.push_str(&super::stmt::render_switch_case(case, depth + 1, unit));
    }
    s.push_str(&pad(depth, unit));
    s.push('}');
    s
}
