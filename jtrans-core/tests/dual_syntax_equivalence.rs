//! Checks that the brace and indented surfaces parse to the same AST,
//! using the project's canonical hello-world pair (`spec.md` §8 scenario 2).

use jtrans_core::parse;

const HELLO_BRACE: &str = concat!(
    "package com.example;\n",
    "\n",
    "import java.util.List;\n",
    "\n",
    "class Test {\n",
    "    public static void main(String[] args) {\n",
    "        List<String> items = List.of(\"one\", \"two\", \"three\");\n",
    "        System.out.println(\"Hello, world!\");\n",
    "    }\n",
    "}\n",
);

const HELLO_INDENTED: &str = concat!(
    "package com.example\n",
    "\n",
    "import java.util.List\n",
    "\n",
    "class Test:\n",
    "    public static void main(String[] args):\n",
    "        List<String> items = [\"one\", \"two\", \"three\"]\n",
    "        System.out.println(\"Hello, world!\")\n",
);

#[test]
fn hello_world_parses_identically_in_both_surfaces() {
    let brace = parse(HELLO_BRACE, "utf-8").expect("brace surface should parse");
    let indented = parse(HELLO_INDENTED, "utf-8").expect("indented surface should parse");
    assert_eq!(brace, indented);
}

#[test]
fn empty_statement_is_accepted_in_both_surfaces() {
    let brace = "class Foo {\n    void m() {\n        ;\n    }\n}\n";
    let indented = "class Foo:\n    void m():\n        ;\n";
    let brace_ast = parse(brace, "utf-8").expect("brace surface should parse");
    let indented_ast = parse(indented, "utf-8").expect("indented surface should parse");
    assert_eq!(brace_ast, indented_ast);
}

#[test]
fn if_else_chain_parses_identically_in_both_surfaces() {
    let brace = concat!(
        "class Foo {\n",
        "    void m(int x) {\n",
        "        if (x == 0) {\n",
        "            return;\n",
        "        } else if (x == 1) {\n",
        "            return;\n",
        "        } else {\n",
        "            return;\n",
        "        }\n",
        "    }\n",
        "}\n",
    );
    let indented = concat!(
        "class Foo:\n",
        "    void m(int x):\n",
        "        if x == 0:\n",
        "            return\n",
        "        else if x == 1:\n",
        "            return\n",
        "        else:\n",
        "            return\n",
    );
    let brace_ast = parse(brace, "utf-8").expect("brace surface should parse");
    let indented_ast = parse(indented, "utf-8").expect("indented surface should parse");
    assert_eq!(brace_ast, indented_ast);
}
