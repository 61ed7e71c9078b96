//! Command-line interface for jtrans.
//!
//! ```text
//! jtrans convert <input> [--from indented|braced|auto] [--output <file>]
//! jtrans check <input> [--from indented|braced|auto]
//! ```
//!
//! This CLI is intentionally thin and contains no lexical or grammar logic
//! of its own (`spec.md` §6) — all scanning/parsing/rendering lives in
//! `jtrans-core`. `--from` only exists to let a caller document which
//! dialect a file is in; the scanner accepts both uniformly in a single
//! pass (`spec.md` §4.1 "output for both dialects is the same stream of
//! classified tokens"), so it never changes how a file actually parses.

use clap::{Parser, Subcommand, ValueEnum};
use jtrans_config::Loader;
use jtrans_core::RenderConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jtrans", version, about = "A bidirectional transpiler between indented and braced Java")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,

    /// Path to a jtrans.toml overriding the built-in formatting defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Parse `input` and write rendered Java to `--output` (or a sibling `.java` file).
    Convert {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Dialect::Auto)]
        from: Dialect,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Parse `input` and print `ok` or the structured parse error.
    Check {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Dialect::Auto)]
        from: Dialect,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Dialect {
    Indented,
    Braced,
    Auto,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        CliCommand::Convert { input, from, output } => run_convert(&input, from, output.as_deref(), &config),
        CliCommand::Check { input, from } => run_check(&input, from),
    }
}

fn load_config(path: Option<&Path>) -> Result<jtrans_config::JtransConfig, config::ConfigError> {
    match path {
        Some(p) => Loader::new().with_file(p).build(),
        None => Loader::new().build(),
    }
}

fn run_convert(input: &Path, from: Dialect, output: Option<&Path>, config: &jtrans_config::JtransConfig) -> ExitCode {
    let _ = from;
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {e}", input.display());
            return ExitCode::FAILURE;
        }
    };

    let render_config = RenderConfig {
        indent_unit: config.formatting.indent_string.clone(),
    };
    let rendered = match jtrans_core::transpile(&source, "utf-8", &render_config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Parse error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dest = output.map(Path::to_path_buf).unwrap_or_else(|| default_output_path(input));
    match fs::write(&dest, rendered) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing file '{}': {e}", dest.display());
            ExitCode::FAILURE
        }
    }
}

fn run_check(input: &Path, from: Dialect) -> ExitCode {
    let _ = from;
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {e}", input.display());
            return ExitCode::FAILURE;
        }
    };

    match jtrans_core::parse(&source, "utf-8") {
        Ok(_) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// The input's filename with its extension replaced by `.java`, or with
/// `.java` appended if it was already `.java` (`spec.md` §6).
fn default_output_path(input: &Path) -> PathBuf {
    if input.extension().and_then(|e| e.to_str()) == Some("java") {
        let mut name = input.as_os_str().to_os_string();
        name.push(".java");
        PathBuf::from(name)
    } else {
        input.with_extension("java")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_swaps_extension() {
        assert_eq!(default_output_path(Path::new("Foo.jdt")), PathBuf::from("Foo.java"));
    }

    #[test]
    fn default_output_path_appends_when_already_java() {
        assert_eq!(default_output_path(Path::new("Foo.java")), PathBuf::from("Foo.java.java"));
    }
}
