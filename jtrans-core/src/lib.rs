//! Scanner, parser, AST, and renderer for the jtrans dialect pair:
//! a brace-delimited standard-Java surface and an indentation-sensitive
//! alternate surface, both parsing into the same AST (`spec.md` §1).

pub mod ast;
pub mod buffer;
pub mod error;
pub mod parser;
pub mod position;
pub mod qualified_name;
pub mod render;
pub mod scanner;
pub mod token;

pub use ast::CompilationRoot;
pub use error::{JTransError, ParseError, ScanError};
pub use render::{render, RenderConfig};

/// Parses `source` (in the encoding named by `encoding`, used only to stamp
/// the `ENCODING` token — decoding itself happens before this call, per
/// `spec.md` §1) into a `CompilationRoot`. Either dialect is accepted
/// transparently; the scanner/parser don't need to be told which one they
/// are looking at (`spec.md` §4.1/§4.3).
pub fn parse(source: &str, encoding: &str) -> Result<CompilationRoot, JTransError> {
    parser::parse(source, encoding)
}

/// Parses `source`, then renders the result as standard brace-delimited
/// Java with `config`'s formatting, per `spec.md` §6 "Rendering contract".
/// This is the bidirectional transpiler's full pipeline: either surface in,
/// one surface out.
pub fn transpile(source: &str, encoding: &str, config: &RenderConfig) -> Result<String, JTransError> {
    let root = parse(source, encoding)?;
    Ok(render(&root, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpiles_a_trivial_brace_unit() {
        let src = "package p;\nclass A {\n}\n";
        let out = transpile(src, "utf-8", &RenderConfig::default()).unwrap();
        assert!(out.contains("package p;"));
        assert!(out.contains("class A {}"));
    }
}
