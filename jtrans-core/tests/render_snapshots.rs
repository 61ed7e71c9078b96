//! Snapshot tests for the renderer, grounded in the teacher's
//! `tests/lexer_samples.rs` use of `insta`. Inline snapshots are used
//! throughout since there is no recorded `.snap` baseline to review against.

use jtrans_core::{parse, render, RenderConfig};

fn render_source(source: &str) -> String {
    let root = parse(source, "utf-8").expect("fixture should parse");
    render(&root, &RenderConfig::default())
}

#[test]
fn renders_a_class_with_a_field_and_method() {
    let source = "class Foo:\n    private int count;\n\n    public int get():\n        return count\n";
    insta::assert_snapshot!(render_source(source), @r###"
    class Foo {
    	private int count;
    	public int get() {
    		return count;
    	}
    }
    "###);
}

#[test]
fn renders_an_if_else_if_chain_flattened() {
    let source = concat!(
        "class Foo:\n",
        "    void m(int x):\n",
        "        if x == 0:\n",
        "            return\n",
        "        else if x == 1:\n",
        "            return\n",
        "        else:\n",
        "            return\n",
    );
    insta::assert_snapshot!(render_source(source), @r###"
    class Foo {
    	void m(int x) {
    		if (x == 0) {
    			return;
    		} else if (x == 1) {
    			return;
    		} else {
    			return;
    		}
    	}
    }
    "###);
}

#[test]
fn renders_a_switch_expression_with_a_multi_label_arrow_case() {
    let source = concat!(
        "class Foo:\n",
        "    int m(int x):\n",
        "        return switch (x):\n",
        "            case 1, 2 -> 10\n",
        "            default -> 0\n",
    );
    insta::assert_snapshot!(render_source(source), @r###"
    class Foo {
    	int m(int x) {
    		return switch (x) {
    			case 1, 2 -> 10;
    			default -> 0;
    		};
    	}
    }
    "###);
}
