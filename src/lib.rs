//! Siftview - stateful in-memory fuzzy-search sessions over record collections.
//!
//! A [`SearchSession`] holds a fixed dataset, a [`MatchConfig`], and a mutable
//! query term, and exposes a filtered/ranked view of the dataset that tracks
//! the term. Matching itself is pluggable: the session drives any engine
//! implementing the [`MatchEngine`]/[`BindEngine`] capability traits and ships
//! with [`KeyedMatcher`], a keyed fuzzy matcher over JSON-representable
//! records.
//!
//! # Architecture
//!
//! - **config**: match configuration (keys, threshold, engine passthroughs)
//! - **error**: the configuration-rejection error raised at binding
//! - **matching**: the engine capability traits and the default keyed engine
//! - **session**: the session core mediating term state and engine access
//!
//! # Example
//!
//! ```
//! use siftview::{MatchConfig, SearchSession};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"id": 1, "fullName": "Martin Lindgren"}),
//!     json!({"id": 2, "fullName": "Another Person"}),
//! ];
//!
//! let mut session: SearchSession<_> =
//!     SearchSession::new(records, MatchConfig::new(["fullName", "id"]))?;
//!
//! session.search("Martin");
//! assert_eq!(session.result().len(), 1);
//!
//! session.reset();
//! assert_eq!(session.result().len(), 2);
//! # Ok::<(), siftview::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod matching;
pub mod session;

pub use config::{MatchConfig, DEFAULT_THRESHOLD};
pub use error::{ConfigError, ConfigResult};
pub use matching::{BindEngine, KeyedMatcher, MatchEngine};
pub use session::{SearchSession, SessionState};
