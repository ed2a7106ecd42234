//! Configuration loading
//!
//! `defaults/plaintasks.default.toml` is embedded into the library so that the
//! documented defaults and runtime behavior stay in sync. Callers layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`PlainTasksConfig`].

use crate::plaintasks::ast::Tag;
use chrono::format::{Item, StrftimeItems};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../../defaults/plaintasks.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlainTasksConfig {
    pub tags: TagsConfig,
    pub actions: ActionsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagsConfig {
    /// Tag names suggested in every document
    pub common: Vec<String>,
}

/// Knobs for the line actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionsConfig {
    pub timestamp_format: String,
    pub done_tag: String,
    pub cancelled_tag: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("invalid tag name '{name}' in {key}")]
    InvalidTagName { key: String, name: String },
    #[error("invalid timestamp format '{0}'")]
    InvalidTimestampFormat(String),
}

impl PlainTasksConfig {
    /// Check values the deserializer cannot: tag names must follow the tag
    /// grammar and the timestamp format must be a valid strftime string.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("actions.done_tag", &self.actions.done_tag),
            ("actions.cancelled_tag", &self.actions.cancelled_tag),
        ];
        let common = self.tags.common.iter().map(|name| ("tags.common", name));
        for (key, name) in named.into_iter().chain(common) {
            if !Tag::is_valid_name(name) {
                return Err(ConfigError::InvalidTagName {
                    key: key.to_string(),
                    name: name.clone(),
                });
            }
        }

        let format = &self.actions.timestamp_format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimestampFormat(format.clone()));
        }
        Ok(())
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the configuration.
    pub fn build(self) -> Result<PlainTasksConfig, ConfigError> {
        let config: PlainTasksConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PlainTasksConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.tags.common.len(), 10);
        assert_eq!(config.tags.common[0], "today");
        assert_eq!(config.actions.timestamp_format, "%y-%m-%d %H:%M");
        assert_eq!(config.actions.done_tag, "done");
        assert_eq!(config.actions.cancelled_tag, "cancelled");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("actions.done_tag", "finished")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.actions.done_tag, "finished");
    }

    #[test]
    fn rejects_invalid_tag_names() {
        let err = Loader::new()
            .set_override("actions.cancelled_tag", "not a tag")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTagName { ref key, .. } if key == "actions.cancelled_tag"
        ));
    }

    #[test]
    fn rejects_invalid_common_tag() {
        let mut config = load_defaults().unwrap();
        config.tags.common.push("2x".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTagName { ref key, ref name }) if key == "tags.common" && name == "2x"
        ));
    }

    #[test]
    fn rejects_invalid_timestamp_format() {
        let err = Loader::new()
            .set_override("actions.timestamp_format", "%Q")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimestampFormat(_)));
    }

    #[test]
    fn layers_files_over_defaults() {
        let path = std::env::temp_dir().join(format!(
            "plaintasks-settings-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[tags]\ncommon = [\"home\", \"errand\"]").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.tags.common, vec!["home", "errand"]);
        assert_eq!(config.actions.done_tag, "done");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/plaintasks.toml")
            .build()
            .unwrap();
        assert_eq!(config, load_defaults().unwrap());
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/plaintasks.toml").build();
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
