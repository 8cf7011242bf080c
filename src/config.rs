//! Engine configuration.
//!
//! All settings have defaults, so an empty JSON object is a valid
//! configuration file.
//!
//! ```
//! use ordo::config::{EngineConfig, StalenessPolicy};
//!
//! let config = EngineConfig::builder()
//!     .max_indexes(4)
//!     .staleness(StalenessPolicy::Frozen)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cache.max_indexes, Some(4));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrdoError, Result};

/// What happens to a cached index once documents are added after it was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalenessPolicy {
    /// Rebuild the index the next time a query resolves it.
    #[default]
    RebuildOnNextQuery,
    /// Keep serving the index as built until it is invalidated explicitly.
    /// Replacing the mappings does not drop it either.
    Frozen,
}

/// Policy for the per-sort-spec index cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexCacheConfig {
    /// Maximum number of cached indexes. `None` means unbounded. When full,
    /// the least recently resolved index is evicted.
    pub max_indexes: Option<usize>,

    /// Handling of indexes built before later insertions.
    pub staleness: StalenessPolicy,
}

/// Top-level configuration of a [`SearchEngine`](crate::engine::SearchEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Index cache policy.
    pub cache: IndexCacheConfig,

    /// Replaces the default English stop word list when set.
    pub stop_words: Option<Vec<String>>,
}

impl EngineConfig {
    /// Create a new builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.cache.max_indexes == Some(0) {
            return Err(OrdoError::invalid_config(
                "cache.max_indexes must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`EngineConfig`].
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Bound the number of cached indexes.
    pub fn max_indexes(mut self, max: usize) -> Self {
        self.config.cache.max_indexes = Some(max);
        self
    }

    /// Set the staleness policy.
    pub fn staleness(mut self, policy: StalenessPolicy) -> Self {
        self.config.cache.staleness = policy;
        self
    }

    /// Use a custom stop word list.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cache.max_indexes, None);
        assert_eq!(config.cache.staleness, StalenessPolicy::RebuildOnNextQuery);
        assert!(config.stop_words.is_none());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = EngineConfig::builder().max_indexes(0).build().unwrap_err();
        assert!(matches!(err, OrdoError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"cache":{"staleness":"frozen"}}"#).unwrap();
        assert_eq!(config.cache.staleness, StalenessPolicy::Frozen);
        assert_eq!(config.cache.max_indexes, None);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cache":{{"max_indexes":2}},"stop_words":["x"]}}"#).unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.cache.max_indexes, Some(2));
        assert_eq!(config.stop_words, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_from_json_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cache":{{"max_indexes":0}}}}"#).unwrap();
        assert!(EngineConfig::from_json_file(file.path()).is_err());
    }
}
