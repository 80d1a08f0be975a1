//! Match configuration.
//!
//! This module defines [`MatchConfig`], the configuration a session binds an
//! engine with: which record fields are eligible for matching, how strict the
//! similarity cutoff is, and an open map of engine-specific options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default similarity cutoff. 0 is exact-only; lower is stricter.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Configuration for a matching-engine binding.
///
/// `keys` and `threshold` are recognized by every engine; everything else the
/// caller supplies lands in `options` and is handed to the engine unchanged.
/// A dotted key such as `"address.city"` addresses a nested field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Field names eligible for matching
    pub keys: Vec<String>,

    /// Similarity cutoff on a 0-1 scale (default: 0.2)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Engine-specific options, passed through unchanged
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl MatchConfig {
    /// Create a configuration matching on the given keys, with the default
    /// threshold and no engine-specific options.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MatchConfig {
            keys: keys.into_iter().map(Into::into).collect(),
            threshold: DEFAULT_THRESHOLD,
            options: Map::new(),
        }
    }

    /// Set the similarity cutoff.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set an engine-specific option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            keys: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
            options: Map::new(),
        }
    }
}
