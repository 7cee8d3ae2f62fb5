//! Shared configuration loader for the gherkin-lexer tools.
//!
//! `defaults/gherkin.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GherkinConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gherkin_lexer::gherkin::lexing::ScanOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/gherkin.default.toml");

/// Top-level configuration consumed by gherkin-lexer applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GherkinConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by the document driver.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub skip_blank_lines: bool,
    pub comment_prefix: String,
    pub feature_header: bool,
    pub join_doc_strings: bool,
}

impl ScanConfig {
    /// Driver options for these settings. An empty comment prefix turns comments off.
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_blank_lines: self.skip_blank_lines,
            comment_prefix: (!self.comment_prefix.is_empty()).then(|| self.comment_prefix.clone()),
            feature_header: self.feature_header,
            join_doc_strings: self.join_doc_strings,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered output format
    pub format: String,
    pub show_context: bool,
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
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GherkinConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GherkinConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.scan.skip_blank_lines);
        assert_eq!(config.scan.comment_prefix, "#");
        assert_eq!(config.output.format, "listing");
        assert!(config.output.show_context);
    }

    #[test]
    fn defaults_match_scan_options_default() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.scan.to_scan_options(), ScanOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("scan.feature_header", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.scan.feature_header);
    }

    #[test]
    fn empty_comment_prefix_disables_comments() {
        let config = Loader::new()
            .set_override("scan.comment_prefix", "")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.scan.to_scan_options().comment_prefix, None);
    }

    #[test]
    fn layers_user_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("gherkin.toml");
        fs::write(&path, "[scan]\ncomment_prefix = \"//\"\n").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.scan.comment_prefix, "//");
        assert!(config.scan.skip_blank_lines);
    }

    #[test]
    fn later_files_win() {
        let dir = tempdir().expect("temp dir");
        let local = dir.path().join("gherkin.toml");
        let custom = dir.path().join("custom.toml");
        fs::write(&local, "[output]\nformat = \"yaml\"\nshow_context = false\n")
            .expect("write config");
        fs::write(&custom, "[output]\nformat = \"json\"\n").expect("write config");

        let config = Loader::new()
            .with_optional_file(&local)
            .with_file(&custom)
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.output.show_context);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "listing");
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }
}
