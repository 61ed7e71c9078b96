//! Shared configuration loader for the jtrans toolchain.
//!
//! `defaults/jtrans.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`JtransConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/jtrans.default.toml");

/// Top-level configuration consumed by jtrans applications.
#[derive(Debug, Clone, Deserialize)]
pub struct JtransConfig {
    pub formatting: FormattingConfig,
    pub rendering: RenderingConfig,
}

/// Formatting-related configuration, mirroring the knobs the renderer
/// exposes (`spec.md` §4.4 "a configurable indent string").
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub indent_string: String,
    pub max_blank_lines: usize,
    pub rules: FormattingRulesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormattingRulesConfig {
    pub tab_size: usize,
    pub blank_lines_between_types: usize,
}

/// Knobs for the rendering contract itself (`spec.md` §6).
#[derive(Debug, Clone, Deserialize)]
pub struct RenderingConfig {
    pub always_brace: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).format(FileFormat::Toml).required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).format(FileFormat::Toml).required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<JtransConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JtransConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.formatting.indent_string, "\t");
        assert_eq!(config.formatting.max_blank_lines, 1);
        assert!(config.rendering.always_brace);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("formatting.indent_string", "  ")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.indent_string, "  ");
    }
}
