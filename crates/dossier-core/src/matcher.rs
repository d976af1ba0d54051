//! Name matching.
//!
//! A query is classified into one of two modes from its text alone:
//!
//! - [`QueryMode::FullName`] when the trimmed query contains whitespace.
//!   Demands exact equality or a whole-string ratio at or above
//!   `full_name` (default 95).
//! - [`QueryMode::Nickname`] otherwise. Accepts a substring hit, a
//!   partial ratio at or above `partial` (default 80), or a per-token
//!   ratio at or above `token` (default 85).
//!
//! All comparisons are done on upper-cased text.

use std::fmt;
use std::sync::Arc;

use crate::similarity::{IndelSimilarity, Similarity};

/// Matching strategy selected from the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    FullName,
    Nickname,
}

impl QueryMode {
    pub fn classify(query: &str) -> Self {
        if query.trim().chars().any(char::is_whitespace) {
            QueryMode::FullName
        } else {
            QueryMode::Nickname
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryMode::FullName => "FULL NAME",
            QueryMode::Nickname => "NICKNAME",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Similarity cut-offs, each on the `0..=100` scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// Whole-string ratio accepted in full-name mode.
    pub full_name: f64,
    /// Partial ratio accepted in nickname mode.
    pub partial: f64,
    /// Per-token ratio accepted in nickname mode.
    pub token: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            full_name: 95.0,
            partial: 80.0,
            token: 85.0,
        }
    }
}

/// Decides whether a record name matches a query.
#[derive(Clone)]
pub struct Matcher {
    scorer: Arc<dyn Similarity>,
    thresholds: MatchThresholds,
}

impl Matcher {
    pub fn new(scorer: Arc<dyn Similarity>, thresholds: MatchThresholds) -> Self {
        Self { scorer, thresholds }
    }

    pub fn thresholds(&self) -> MatchThresholds {
        self.thresholds
    }

    /// Dispatch on the mode classified from `query`.
    pub fn matches(&self, record_name: &str, query: &str) -> bool {
        match QueryMode::classify(query) {
            QueryMode::FullName => self.matches_full(record_name, query),
            QueryMode::Nickname => self.matches_nick(record_name, query),
        }
    }

    /// Full-name mode: exact equality, else near-exact ratio.
    pub fn matches_full(&self, record_name: &str, query: &str) -> bool {
        let query = query.trim().to_uppercase();
        let name = record_name.trim().to_uppercase();

        if name == query {
            return true;
        }

        self.scorer.ratio(&name, &query) >= self.thresholds.full_name
    }

    /// Nickname mode: substring, partial ratio, then per-token checks.
    pub fn matches_nick(&self, record_name: &str, query: &str) -> bool {
        let query = query.to_uppercase();
        let name = record_name.to_uppercase();

        if name.contains(&query) {
            return true;
        }

        if self.scorer.partial_ratio(&query, &name) >= self.thresholds.partial {
            return true;
        }

        name.split_whitespace().any(|token| {
            self.scorer.ratio(&query, token) >= self.thresholds.token || token.contains(&query)
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Arc::new(IndelSimilarity), MatchThresholds::default())
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}
