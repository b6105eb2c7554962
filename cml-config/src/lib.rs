//! Shared configuration loader for the CML tools.
//!
//! `defaults/cml.default.toml` is embedded into every binary so that the documented defaults
//! and runtime behavior stay in sync. Applications layer user files and command-line overrides
//! on top of those defaults via [`Loader`] before deserializing into [`CmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub use cml_parser::cml::building::{BuildOptions, DuplicatePolicy, ReferencePolicy};
pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/cml.default.toml");

/// Top-level configuration consumed by CML applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CmlConfig {
    /// Handed to the model builder as is
    pub build: BuildOptions,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Verbosity of the diagnostic log, in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// The level `steps` notches more verbose, saturating at trace
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let index = self as usize + steps as usize;
        ORDER[index.min(ORDER.len() - 1)]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
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

    /// Apply a single key/value override, e.g. `("build.references", "error")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CmlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.build, BuildOptions::default());
        assert!(config.output.pretty_json);
        assert_eq!(config.logging.level, LogLevel::Error);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("build.references", "error")
            .expect("override to apply")
            .set_override("logging.level", "debug")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.build.references, ReferencePolicy::Error);
        assert_eq!(config.build.duplicates, DuplicatePolicy::Shadow);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[build]\nduplicates = \"reject\"\n[output]\npretty_json = false")
            .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.build.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.build.references, ReferencePolicy::Warn);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
        assert!(Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .is_ok());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Loader::new()
            .set_override("build.references", "ignore")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn log_level_raises_and_saturates() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Info.raised(9), LogLevel::Trace);
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
