//! Fuzzy matching engines.
//!
//! This module defines the capability interface a session drives its matcher
//! through, and the default keyed engine used when no custom engine is
//! supplied.

pub mod engine;
pub mod keyed;

pub use engine::{BindEngine, MatchEngine};
pub use keyed::KeyedMatcher;
