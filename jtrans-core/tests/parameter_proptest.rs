//! Property-based tests for the parser, grounded in the teacher's
//! `tests/lexer_proptest.rs` harness style.

use jtrans_core::ast::{Member, Type, TypeArgument, TypeDecl};
use jtrans_core::parse;
use proptest::prelude::*;

fn field_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int".to_string()),
        Just("Integer".to_string()),
        Just("String".to_string()),
        Just("java.util.List<String>".to_string()),
    ]
}

fn nested_generic_strategy(depth: u32) -> impl Strategy<Value = String> {
    (2..=depth).prop_map(|n| {
        let mut s = "List".to_string();
        for _ in 1..n {
            s = format!("List<{s}>");
        }
        s
    })
}

fn class_with_field(field_type: &str) -> String {
    format!("class Gen {{\n    {field_type} x;\n}}\n")
}

fn type_depth(ty: &Type) -> usize {
    match ty {
        Type::Generic { typeargs: Some(args), .. } => {
            1 + args
                .iter()
                .map(|a| match a {
                    TypeArgument::Type(t) => type_depth(t),
                    TypeArgument::Wildcard { .. } => 0,
                })
                .max()
                .unwrap_or(0)
        }
        Type::Generic { .. } => 1,
        Type::Array { base, .. } => type_depth(base),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn ordinary_field_types_always_parse(ty in field_type_strategy()) {
        let src = class_with_field(&ty);
        prop_assert!(parse(&src, "utf-8").is_ok());
    }

    /// Arbitrarily deep `List<List<...>>` nesting never collapses into a
    /// shift operator — every level of `<`/`>` closes its own generic
    /// (`spec.md` §8 scenario 4).
    #[test]
    fn nested_generics_never_collapse_into_a_shift(ty in nested_generic_strategy(6)) {
        let src = class_with_field(&ty);
        let root = parse(&src, "utf-8").expect("nested generics should parse");
        let jtrans_core::ast::CompilationRoot::Unit(unit) = root else { unreachable!() };
        let TypeDecl::Class(class) = &unit.types[0] else { unreachable!() };
        let Member::Field(field) = &class.members[0] else { unreachable!() };
        let expected_depth = ty.matches('<').count();
        prop_assert_eq!(type_depth(&field.declaration.ty), expected_depth);
    }

    /// `var` is only legal in the single-declarator local form; as a
    /// field, method-parameter, or return type it is always rejected
    /// (`spec.md` §8 universal invariant).
    #[test]
    fn var_is_always_rejected_outside_local_declarations(prefix in "[a-z]{0,8}") {
        let _ = prefix;
        let field_src = "class Gen {\n    var x;\n}\n";
        prop_assert!(parse(field_src, "utf-8").is_err());
        let param_src = "class Gen {\n    void m(var x) {\n    }\n}\n";
        prop_assert!(parse(param_src, "utf-8").is_err());
        let return_src = "class Gen {\n    var m() {\n        return null;\n    }\n}\n";
        prop_assert!(parse(return_src, "utf-8").is_err());
    }

    #[test]
    fn var_with_multiple_declarators_is_rejected(count in 2usize..5) {
        let names: Vec<String> = (0..count).map(|i| format!("x{i}")).collect();
        let src = format!("class Gen {{\n    void m() {{\n        var {} = 1;\n    }}\n}}\n", names.join(", "));
        prop_assert!(parse(&src, "utf-8").is_err());
    }
}
