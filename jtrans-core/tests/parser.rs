//! Integration tests for the parser's declaration and statement grammar.

use jtrans_core::ast::*;
use jtrans_core::parse;
use rstest::rstest;

fn parse_unit(source: &str) -> CompilationUnit {
    match parse(source, "utf-8").expect("source should parse") {
        CompilationRoot::Unit(unit) => unit,
        CompilationRoot::Module(_) => panic!("expected a plain compilation unit"),
    }
}

#[test]
fn package_round_trips_through_the_ast() {
    let unit = parse_unit("package com.test;\n");
    assert_eq!(unit.package.as_ref().unwrap().name.as_str(), "com.test");
}

#[rstest]
#[case("class Foo {\n    int x;\n}\n")]
#[case("class Foo:\n    int x;\n")]
fn class_with_one_field_parses_in_both_dialects(#[case] source: &str) {
    let unit = parse_unit(source);
    assert_eq!(unit.types.len(), 1);
    let TypeDecl::Class(class) = &unit.types[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(class.header.name, "Foo");
    assert_eq!(class.members.len(), 1);
}

#[test]
fn list_literal_lowers_to_list_of_call() {
    let src = "class Foo {\n    void m() {\n        Object x = [a, b, c];\n    }\n}\n";
    let unit = parse_unit(src);
    let TypeDecl::Class(class) = &unit.types[0] else { panic!() };
    let Member::Function(func) = &class.members[0] else { panic!() };
    let Stmt::VarDecl(decl) = &func.body.as_ref().unwrap()[0] else { panic!() };
    let Some(Expr::FunctionCall { object, name, args, .. }) = &decl.declarators[0].initializer else {
        panic!("expected a function call initializer");
    };
    assert_eq!(name, "of");
    assert_eq!(args.len(), 3);
    let Some(object) = object else { panic!("List.of needs a receiver") };
    let Expr::MemberAccess { name: recv_name, .. } = object.as_ref() else { panic!() };
    assert_eq!(recv_name, "List");
}

#[test]
fn nested_generics_never_parse_as_a_shift() {
    let src = "class Foo {\n    Map<String, List<Integer>> m;\n}\n";
    let unit = parse_unit(src);
    let TypeDecl::Class(class) = &unit.types[0] else { panic!() };
    let Member::Field(field) = &class.members[0] else { panic!() };
    match &field.declaration.ty {
        Type::Generic { name, typeargs, .. } => {
            assert_eq!(name.as_str(), "Map");
            let args = typeargs.as_ref().expect("Map should carry type arguments");
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected a generic type, got {other:?}"),
    }
}

#[test]
fn unsigned_shift_right_parses_as_one_operator() {
    let src = "class Foo {\n    void m() {\n        x = x >>> y;\n    }\n}\n";
    let unit = parse_unit(src);
    let TypeDecl::Class(class) = &unit.types[0] else { panic!() };
    let Member::Function(func) = &class.members[0] else { panic!() };
    let Stmt::Expression(expr) = &func.body.as_ref().unwrap()[0] else { panic!() };
    let Expr::Assignment { value, .. } = expr.as_ref() else { panic!() };
    assert!(matches!(value.as_ref(), Expr::Binary { op: BinaryOp::UShr, .. }));
}

#[test]
fn multi_label_arrow_case_keeps_one_case_with_two_labels() {
    let src = concat!(
        "class Foo {\n",
        "    Day m(String s) {\n",
        "        return switch (s) {\n",
        "            case \"Mon.\", \"Mon\" -> MONDAY;\n",
        "            default -> null;\n",
        "        };\n",
        "    }\n",
        "}\n",
    );
    let unit = parse_unit(src);
    let TypeDecl::Class(class) = &unit.types[0] else { panic!() };
    let Member::Function(func) = &class.members[0] else { panic!() };
    let Stmt::Return(Some(expr)) = &func.body.as_ref().unwrap()[0] else { panic!() };
    let Expr::Switch(switch_expr) = expr.as_ref() else { panic!() };
    assert_eq!(switch_expr.cases[0].labels.len(), 2);
    assert!(switch_expr.cases[0].arrow);
    assert_eq!(switch_expr.cases[0].body.len(), 1);
}

#[rstest]
#[case("class Foo {\n    void m(java.util.List<String> strs) {\n        for (String s : strs) {\n        }\n    }\n}\n")]
#[case("class Foo:\n    void m(java.util.List<String> strs):\n        for String s : strs:\n            ;\n")]
fn enhanced_for_parses_identically_in_both_dialects(#[case] source: &str) {
    let unit = parse_unit(source);
    let TypeDecl::Class(class) = &unit.types[0] else { panic!() };
    let Member::Function(func) = &class.members[0] else { panic!() };
    let Stmt::For { control, .. } = &func.body.as_ref().unwrap()[0] else { panic!() };
    let ForControl::Enhanced(enhanced) = control else { panic!("expected an enhanced for") };
    assert_eq!(enhanced.var.declarators[0].name, "s");
}

#[test]
fn var_is_rejected_as_a_field_type_name() {
    let src = "class Foo {\n    var x;\n}\n";
    assert!(parse(src, "utf-8").is_err());
}

#[test]
fn var_is_accepted_in_a_single_declarator_local() {
    let src = "class Foo {\n    void m() {\n        var x = 1;\n    }\n}\n";
    assert!(parse(src, "utf-8").is_ok());
}
