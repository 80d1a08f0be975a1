//! Error types for siftview.
//!
//! This module defines the crate's error types using `thiserror`. All failure
//! is concentrated at engine binding: once a session exists, its query and
//! mutation operations cannot fail.

use thiserror::Error;

/// Errors raised when a matching engine rejects its configuration.
///
/// Raised only from [`SearchSession::new`](crate::SearchSession::new) and
/// [`SearchSession::rebind`](crate::SearchSession::rebind). Empty query
/// results are values, not errors, and never surface here.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No keys were configured, so no record field is eligible for matching
    #[error("no match keys configured")]
    EmptyKeys,

    /// Threshold is outside the 0-1 similarity scale
    #[error("threshold {value} is outside the 0.0..=1.0 range")]
    InvalidThreshold { value: f64 },

    /// A recognized engine option has the wrong shape
    #[error("invalid value for option {name}: {reason}")]
    InvalidOption { name: String, reason: String },

    /// Engine-specific rejection from a third-party engine
    #[error("configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
