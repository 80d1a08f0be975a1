//! The engine capability interface.

use crate::config::MatchConfig;
use crate::error::ConfigResult;

/// Query capability of a bound fuzzy-matching engine.
///
/// All matching internals (tokenization, scoring, threshold semantics) live
/// behind this trait; the session only decides when to call it.
pub trait MatchEngine {
    /// Return the indices of matching records, ordered by the engine's
    /// ranking.
    ///
    /// Indices refer to the dataset the engine was bound to. An empty vector
    /// is a normal result, not an error. `term` is never empty; the session
    /// answers the empty term itself without consulting the engine.
    fn query(&self, term: &str) -> Vec<usize>;
}

/// Construction capability: build an engine binding for one dataset and
/// configuration pair.
///
/// A binding is built once per pair, at session construction or an explicit
/// rebind, and answers any number of queries afterwards.
pub trait BindEngine<R>: MatchEngine + Sized {
    /// Build the engine binding for `records` under `config`.
    ///
    /// This is the only operation allowed to fail: a configuration the engine
    /// cannot bind to is rejected here, never deferred to the first query.
    fn bind(records: &[R], config: &MatchConfig) -> ConfigResult<Self>;
}
