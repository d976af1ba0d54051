//! Corpus search.
//!
//! 1. Trim the query; an empty query returns no hits.
//! 2. Classify the query into a [`QueryMode`].
//! 3. Walk the corpus in stored order, skipping nameless records.
//! 4. Keep each matching record whose `(name, NIK, NIP)` key has not
//!    already been kept.
//!
//! Hits are not scored or ranked; they come back in corpus order.

use std::collections::HashSet;

use crate::matcher::{Matcher, QueryMode};
use crate::models::{CanonicalRecord, Corpus};
use crate::schema::Field;

/// Result of one search, with the mode that produced it.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// The trimmed query.
    pub query: String,
    pub mode: QueryMode,
    pub hits: Vec<&'a CanonicalRecord>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Applies a [`Matcher`] across a [`Corpus`].
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    matcher: Matcher,
}

impl SearchEngine {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Matching records in corpus order, deduplicated.
    pub fn search<'a>(&self, corpus: &'a Corpus, query: &str) -> Vec<&'a CanonicalRecord> {
        self.execute(corpus, query).hits
    }

    /// Like [`search`](Self::search), also reporting the query mode.
    pub fn execute<'a>(&self, corpus: &'a Corpus, query: &str) -> SearchOutcome<'a> {
        let query = query.trim();
        let mode = QueryMode::classify(query);
        let mut outcome = SearchOutcome {
            query: query.to_string(),
            mode,
            hits: Vec::new(),
        };

        if query.is_empty() {
            return outcome;
        }

        let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();

        for record in corpus {
            let name = record.name();
            if name.is_empty() {
                continue;
            }

            let key = dedup_key(record);
            if seen.contains(&key) {
                continue;
            }

            let matched = match mode {
                QueryMode::FullName => self.matcher.matches_full(name, query),
                QueryMode::Nickname => self.matcher.matches_nick(name, query),
            };

            if matched {
                seen.insert(key);
                outcome.hits.push(record);
            }
        }

        outcome
    }
}

/// Records sharing this key are the same person seen in several sources.
fn dedup_key(record: &CanonicalRecord) -> (&str, &str, &str) {
    (
        record.name(),
        record.get(Field::NationalId),
        record.get(Field::EmployeeId),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use serde_json::{json, Value};

    fn corpus(entries: &[(Value, &str)]) -> Corpus {
        let normalizer = Normalizer::default();
        Corpus::from_records(entries.iter().map(|(value, source)| {
            normalizer.normalize(value.as_object().unwrap(), source)
        }))
    }

    fn names<'a>(hits: &[&'a CanonicalRecord]) -> Vec<&'a str> {
        hits.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_empty_query() {
        let c = corpus(&[(json!({ "nama": "Andi" }), "a.json")]);
        let engine = SearchEngine::default();
        assert!(engine.search(&c, "").is_empty());
        assert!(engine.search(&c, "   \t ").is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let engine = SearchEngine::default();
        assert!(engine.search(&Corpus::default(), "andi").is_empty());
    }

    #[test]
    fn test_results_in_corpus_order() {
        let c = corpus(&[
            (json!({ "nama": "Budi Santoso" }), "a.json"),
            (json!({ "nama": "Andi Budiman" }), "a.json"),
            (json!({ "nama": "Citra Lestari" }), "b.json"),
            (json!({ "nama": "Budi" }), "b.json"),
        ]);
        let hits = SearchEngine::default().search(&c, "budi");
        assert_eq!(names(&hits), vec!["BUDI SANTOSO", "ANDI BUDIMAN", "BUDI"]);
    }

    #[test]
    fn test_dedup_keeps_first_source() {
        let c = corpus(&[
            (json!({ "nama": "Andi Saputra", "nik": "3201", "nip": "19" }), "first.json"),
            (json!({ "NAME": "andi saputra", "no_ktp": "3201", "employee_id": "19" }), "second.json"),
        ]);
        let hits = SearchEngine::default().search(&c, "Andi Saputra");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source(), "first.json");
    }

    #[test]
    fn test_dedup_distinguishes_ids() {
        let c = corpus(&[
            (json!({ "nama": "Andi Saputra", "nik": "3201" }), "a.json"),
            (json!({ "nama": "Andi Saputra", "nik": "3202" }), "b.json"),
        ]);
        let hits = SearchEngine::default().search(&c, "andi");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_execute_reports_mode() {
        let c = corpus(&[(json!({ "nama": "Andi Saputra" }), "a.json")]);
        let engine = SearchEngine::default();

        let outcome = engine.execute(&c, "  andi saputra ");
        assert_eq!(outcome.mode, QueryMode::FullName);
        assert_eq!(outcome.query, "andi saputra");
        assert_eq!(outcome.hits.len(), 1);

        let outcome = engine.execute(&c, "saputra");
        assert_eq!(outcome.mode, QueryMode::Nickname);
        assert!(!outcome.is_empty());
    }

    #[test]
    fn test_full_name_mode_is_strict() {
        let c = corpus(&[
            (json!({ "nama": "Budi Santoso" }), "a.json"),
            (json!({ "nama": "Budi Hartono" }), "a.json"),
        ]);
        let hits = SearchEngine::default().search(&c, "budi santoso");
        assert_eq!(names(&hits), vec!["BUDI SANTOSO"]);
    }
}
