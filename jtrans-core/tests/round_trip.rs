//! Render-then-reparse round-trip tests (`spec.md` §8: "rendering the
//! resulting AST and re-parsing the rendered text yields a structurally
//! equal AST").

use jtrans_core::{parse, render, RenderConfig};
use rstest::rstest;

fn round_trips(source: &str) {
    let first = parse(source, "utf-8").expect("first parse should succeed");
    let rendered = render(&first, &RenderConfig::default());
    let second = parse(&rendered, "utf-8").unwrap_or_else(|e| {
        panic!("rendered output failed to reparse: {e}\n---\n{rendered}");
    });
    assert_eq!(first, second, "rendered output:\n{rendered}");
}

#[rstest]
#[case("package com.test;\n")]
#[case("class Foo {\n    int x;\n}\n")]
#[case("public final class Foo extends Bar implements Baz {\n    private int x = 1;\n}\n")]
#[case("interface Shape {\n    double area();\n}\n")]
#[case("enum Day {\n    MONDAY, TUESDAY;\n}\n")]
#[case("@interface Marker {\n    String value() default \"\";\n}\n")]
fn declarations_round_trip(#[case] source: &str) {
    round_trips(source);
}

#[rstest]
#[case("class Foo {\n    void m() {\n        if (true) {\n            return;\n        } else if (false) {\n            return;\n        } else {\n            return;\n        }\n    }\n}\n")]
#[case("class Foo {\n    void m() {\n        for (int i = 0; i < 10; i++) {\n            System.out.println(i);\n        }\n    }\n}\n")]
#[case("class Foo {\n    void m(java.util.List<String> items) {\n        for (String s : items) {\n            System.out.println(s);\n        }\n    }\n}\n")]
#[case("class Foo {\n    void m() {\n        try {\n            risky();\n        } catch (java.io.IOException | RuntimeException e) {\n            handle(e);\n        } finally {\n            cleanup();\n        }\n    }\n}\n")]
#[case("class Foo {\n    int m(int x) {\n        return switch (x) {\n            case 1, 2 -> 10;\n            default -> 0;\n        };\n    }\n}\n")]
#[case("class Foo {\n    Runnable r = () -> System.out.println(\"hi\");\n}\n")]
#[case("class Foo {\n    java.util.List<String> names = [\"a\", \"b\"];\n}\n")]
fn statements_and_expressions_round_trip(#[case] source: &str) {
    round_trips(source);
}

#[test]
fn switch_statement_with_empty_arrow_block_round_trips() {
    round_trips("class Foo {\n    void m(int x) {\n        switch (x) {\n            case 1 -> {\n            }\n            default -> {\n                break;\n            }\n        }\n    }\n}\n");
}

#[test]
fn custom_indent_unit_round_trips() {
    let source = "class Foo {\n    int x;\n}\n";
    let ast = parse(source, "utf-8").unwrap();
    let config = RenderConfig { indent_unit: "  ".to_string() };
    let rendered = render(&ast, &config);
    assert!(rendered.contains("  int x;"));
    let reparsed = parse(&rendered, "utf-8").unwrap();
    assert_eq!(ast, reparsed);
}
