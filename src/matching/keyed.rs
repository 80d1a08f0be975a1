//! Default keyed fuzzy-matching engine.
//!
//! `KeyedMatcher` works for any record type that serializes to JSON: at bind
//! time it extracts the configured keys' values into per-record text lists,
//! and queries walk those prepared lists. The extraction is the engine
//! binding: it is paid once per dataset/configuration pair, never per query.

use crate::config::MatchConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::matching::engine::{BindEngine, MatchEngine};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Engine option: match case-sensitively instead of folding to lowercase.
const OPT_CASE_SENSITIVE: &str = "case_sensitive";

/// Scale applied to substring hits so they land well under the default
/// threshold while still ranking fuller covers first.
const SUBSTRING_SCALE: f64 = 0.1;

/// One record's searchable texts, extracted and normalized at bind time.
#[derive(Debug, Clone)]
struct Document {
    texts: Vec<String>,
}

/// Keyed fuzzy matcher over JSON-representable records.
///
/// Scoring is on a 0-1 scale where 0 is an exact match: a text scores as the
/// minimum of an exact check, a substring check scaled by how much of the
/// text the term covers, and the normalized Levenshtein distance against the
/// whole text and against each of its words. A record matches when its best
/// text scores at or under the configured threshold. Results are ordered by
/// ascending score; ties keep dataset order.
pub struct KeyedMatcher {
    documents: Vec<Document>,
    threshold: f64,
    case_sensitive: bool,
}

impl KeyedMatcher {
    /// Number of bound documents (one per record).
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Validate the configuration and parse the options this engine
    /// recognizes.
    ///
    /// Unrecognized options are accepted and ignored; a recognized option of
    /// the wrong shape rejects the binding.
    fn validate_config(config: &MatchConfig) -> ConfigResult<bool> {
        if config.keys.is_empty() {
            return Err(ConfigError::EmptyKeys);
        }

        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: config.threshold,
            });
        }

        match config.options.get(OPT_CASE_SENSITIVE) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(ConfigError::InvalidOption {
                name: OPT_CASE_SENSITIVE.to_string(),
                reason: format!("expected a boolean, got {}", other),
            }),
        }
    }
}

impl MatchEngine for KeyedMatcher {
    fn query(&self, term: &str) -> Vec<usize> {
        let needle = normalize(term, self.case_sensitive);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = Vec::new();
        for (index, doc) in self.documents.iter().enumerate() {
            let best = doc
                .texts
                .iter()
                .map(|text| score(&needle, text))
                .fold(f64::INFINITY, f64::min);

            if best <= self.threshold {
                scored.push((index, best));
            }
        }

        scored.sort_by(|a, b| match a.1.total_cmp(&b.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });

        tracing::debug!(hits = scored.len(), "keyed matcher query evaluated");

        scored.into_iter().map(|(index, _)| index).collect()
    }
}

impl<R: Serialize> BindEngine<R> for KeyedMatcher {
    fn bind(records: &[R], config: &MatchConfig) -> ConfigResult<Self> {
        let case_sensitive = Self::validate_config(config)?;

        let mut documents = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let mut texts = Vec::new();
            match serde_json::to_value(record) {
                Ok(value) => {
                    for key in &config.keys {
                        if let Some(field) = lookup(&value, key) {
                            collect_texts(field, case_sensitive, &mut texts);
                        }
                    }
                }
                Err(err) => {
                    // An unreadable record simply never matches.
                    tracing::debug!(index, error = %err, "record skipped during binding");
                }
            }
            documents.push(Document { texts });
        }

        tracing::debug!(
            records = documents.len(),
            texts = documents.iter().map(|d| d.texts.len()).sum::<usize>(),
            "keyed matcher bound"
        );

        Ok(KeyedMatcher {
            documents,
            threshold: config.threshold,
            case_sensitive,
        })
    }
}

/// Score a prepared text against a normalized term.
fn score(term: &str, text: &str) -> f64 {
    if term == text {
        return 0.0;
    }

    let term_len = term.chars().count();
    let text_len = text.chars().count();

    if text.contains(term) {
        return SUBSTRING_SCALE * (1.0 - term_len as f64 / text_len as f64);
    }

    // Whole-text distance handles multi-word terms; per-word distance gives
    // typo tolerance against individual fields.
    let mut best = normalized_distance(term, text, term_len, text_len);
    for word in text.split_whitespace() {
        best = best.min(normalized_distance(term, word, term_len, word.chars().count()));
    }
    best
}

/// Walk a dotted key path into a JSON value.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Coerce a field value into searchable texts.
///
/// Strings are taken as-is, numbers and booleans through their display form,
/// array elements individually. Null, missing, and object leaves contribute
/// nothing.
fn collect_texts(value: &Value, case_sensitive: bool, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let text = normalize(s, case_sensitive);
            if !text.is_empty() {
                out.push(text);
            }
        }
        Value::Number(n) => out.push(n.to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Array(items) => {
            for item in items {
                collect_texts(item, case_sensitive, out);
            }
        }
        Value::Null | Value::Object(_) => {}
    }
}

/// Normalize text for matching: trim, collapse whitespace, and fold case
/// unless the binding is case-sensitive.
fn normalize(text: &str, case_sensitive: bool) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

/// Levenshtein distance divided by the longer length, so 0 is identical and
/// 1 is entirely different.
fn normalized_distance(a: &str, b: &str, a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 0.0;
    }
    levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Levenshtein distance between two strings, by character.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == *cb { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
