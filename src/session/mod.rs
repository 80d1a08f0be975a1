//! The search session core.
//!
//! A [`SearchSession`] owns one dataset, one configuration, the engine
//! binding built for that pair, and the current query term. It decides when
//! to consult the engine versus hand back the raw dataset; the engine owns
//! everything about how matching works.

use crate::config::MatchConfig;
use crate::error::ConfigResult;
use crate::matching::{BindEngine, KeyedMatcher};

/// Whether a session currently has an active query term.
///
/// Derived from the term, never stored independently: an empty term is
/// `Idle`, anything else is `Querying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active query; the view is the dataset in original order
    Idle,
    /// A non-empty term is active; the view is the engine's ranked output
    Querying,
}

/// The view the session currently exposes.
#[derive(Debug, Clone)]
enum View {
    /// The dataset in original order
    Unfiltered,
    /// Ranked indices returned by the engine for the current term
    Filtered(Vec<usize>),
}

/// A stateful in-memory fuzzy-search session.
///
/// Created over a dataset and a [`MatchConfig`]; mutated through
/// [`search`](SearchSession::search) and [`reset`](SearchSession::reset);
/// observed through [`result`](SearchSession::result) and
/// [`term`](SearchSession::term). The engine binding is built exactly once
/// per dataset/configuration pair (at construction and at
/// [`rebind`](SearchSession::rebind)), never per search call.
///
/// All operations are synchronous and complete before returning. A session
/// is owned by one logical actor; the mutating operations take `&mut self`,
/// so shared multi-threaded mutation requires an external lock.
pub struct SearchSession<R, E = KeyedMatcher> {
    records: Vec<R>,
    config: MatchConfig,
    engine: E,
    term: String,
    view: View,
}

impl<R, E> SearchSession<R, E>
where
    E: BindEngine<R>,
{
    /// Create a session bound to `records` under `config`.
    ///
    /// The engine binding is built immediately. This is the session's only
    /// failure point: a configuration the engine rejects surfaces here as a
    /// [`ConfigError`](crate::ConfigError), and no partially-usable session
    /// exists afterwards. The term starts empty, so the initial view is the
    /// dataset in original order.
    pub fn new(records: Vec<R>, config: MatchConfig) -> ConfigResult<Self> {
        let engine = E::bind(&records, &config)?;
        tracing::debug!(records = records.len(), "search session bound");

        Ok(SearchSession {
            records,
            config,
            engine,
            term: String::new(),
            view: View::Unfiltered,
        })
    }

    /// Replace the dataset/configuration pair and rebuild the engine binding.
    ///
    /// The current term is kept and re-evaluated against the new binding. On
    /// failure the session is left unchanged: the previous binding, dataset,
    /// and view all stay live.
    pub fn rebind(&mut self, records: Vec<R>, config: MatchConfig) -> ConfigResult<()> {
        let engine = E::bind(&records, &config)?;
        tracing::debug!(records = records.len(), "search session rebound");

        self.records = records;
        self.config = config;
        self.engine = engine;
        self.refresh();
        Ok(())
    }

    /// Set the query term and recompute the view.
    ///
    /// Any displayable value is accepted and coerced to its textual
    /// representation, so searching by a numeric field value (`search(42)`)
    /// behaves like searching its text form (`search("42")`). The empty
    /// string is the distinguished "no active query" value and restores the
    /// unfiltered view.
    ///
    /// The view is recomputed eagerly before this call returns; it is never
    /// memoized across term changes.
    pub fn search(&mut self, term: impl ToString) {
        self.term = term.to_string();
        self.refresh();
    }

    /// Clear the term, restoring the unfiltered view. Idempotent.
    pub fn reset(&mut self) {
        self.term.clear();
        self.view = View::Unfiltered;
    }

    /// The records currently exposed, in view order.
    ///
    /// With no active term this is the full dataset in original order; with
    /// an active term it is exactly the engine's ranked output, which may be
    /// empty.
    pub fn result(&self) -> Vec<&R> {
        match &self.view {
            View::Unfiltered => self.records.iter().collect(),
            // Out-of-range indices from a misbehaving engine are dropped.
            View::Filtered(hits) => hits.iter().filter_map(|&i| self.records.get(i)).collect(),
        }
    }

    /// The current term, exactly as last set.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The session's current state, derived from the term.
    pub fn state(&self) -> SessionState {
        if self.term.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Querying
        }
    }

    /// The bound configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The bound dataset, in original order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Recompute the view for the current term. The engine is only consulted
    /// for a non-empty term.
    fn refresh(&mut self) {
        self.view = if self.term.is_empty() {
            View::Unfiltered
        } else {
            View::Filtered(self.engine.query(&self.term))
        };
    }
}
