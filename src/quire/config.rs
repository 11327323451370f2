//! Configuration loader for the site builder.
//!
//! `defaults/quire.default.toml` is embedded into the crate so the documented defaults and
//! runtime behavior stay in sync. Callers layer a user file and command-line overrides on top
//! of those defaults via [`Loader`] before deserializing into [`QuireConfig`].
//!
//! Only the site builder is configurable. The lexer, parser and highlighter take no settings.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/quire.default.toml");

/// Top-level configuration consumed by the `quire` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extension of document files, without the dot
    pub extension: String,
    /// Stylesheet href linked from every page
    pub stylesheet: String,
}

/// Builds a [QuireConfig] from the embedded defaults plus whatever the caller layers on.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `quire.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file on top. `build` fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file on top if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `site.output_dir` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize.
    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.site.source_dir, PathBuf::from("content"));
        assert_eq!(config.site.output_dir, PathBuf::from("public"));
        assert_eq!(config.site.extension, "md");
        assert_eq!(config.site.stylesheet, "source/style/utilities.css");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("site.output_dir", "dist")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.site.output_dir, PathBuf::from("dist"));
        assert_eq!(config.site.extension, "md");
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[site]\nextension = \"qr\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.site.extension, "qr");
        assert_eq!(config.site.source_dir, PathBuf::from("content"));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/quire.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.site.extension, "md");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/quire.toml")
            .build()
            .is_err());
    }
}
