//! Configuration loading
//!
//! `defaults/lexy.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Callers layer user files over those defaults via [`Loader`]
//! before deserializing into [`LexyConfig`].
//!
//! Tag lists are left out of the embedded defaults: layered sources merge arrays element by
//! element, so a user list must land on an absent key to replace the built-in table.

use crate::matching::{MatchRules, PathPolicy};
use crate::vocabulary::{KNOWN_TAGS, SELF_CLOSING_TAGS};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, Value};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TOML: &str = include_str!("../defaults/lexy.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LexyConfig {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    pub matching: MatchingConfig,
}

/// Reference tag tables. `None` selects the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub known_tags: Option<Vec<String>>,
    #[serde(default)]
    pub self_closing: Option<Vec<String>>,
}

impl VocabularyConfig {
    pub fn known_tags(&self) -> Vec<&str> {
        match &self.known_tags {
            Some(tags) => tags.iter().map(String::as_str).collect(),
            None => KNOWN_TAGS.to_vec(),
        }
    }

    pub fn self_closing(&self) -> Vec<&str> {
        match &self.self_closing {
            Some(tags) => tags.iter().map(String::as_str).collect(),
            None => SELF_CLOSING_TAGS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub hint_distance: usize,
    pub path_policy: PathPolicy,
}

impl LexyConfig {
    /// Matcher rules described by this configuration.
    pub fn match_rules(&self) -> MatchRules {
        MatchRules::new(self.vocabulary.self_closing())
            .with_hint_distance(self.matching.hint_distance)
            .with_path_policy(self.matching.path_policy)
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        match &self.vocabulary.known_tags {
            Some(tags) => tags.iter().any(|known| known == tag),
            None => crate::vocabulary::is_known_tag(tag),
        }
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

    /// Apply a single key/value override on top of every layered file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<Value>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LexyConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LexyConfig, ConfigError> {
    Loader::new().build()
}
