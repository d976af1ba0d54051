//! # Dossier Core
//!
//! Pure logic for Dossier: the canonical record schema, the alias table,
//! record normalization, fuzzy name matching, and the search algorithm.
//!
//! This crate does no filesystem, terminal, or async I/O. Callers parse
//! sources into [`RawRecord`]s, normalize them with a [`Normalizer`], and
//! query the resulting [`Corpus`] through a [`SearchEngine`].
//!
//! ```rust
//! use dossier_core::{Corpus, Normalizer, SearchEngine};
//! use serde_json::json;
//!
//! let normalizer = Normalizer::default();
//! let raw = json!({ "nama": "Andi Saputra", "no_ktp": "3201" });
//! let record = normalizer.normalize(raw.as_object().unwrap(), "people.json");
//!
//! let corpus = Corpus::from_records(vec![record]);
//! let engine = SearchEngine::default();
//! let hits = engine.search(&corpus, "andi");
//! assert_eq!(hits.len(), 1);
//! ```

pub mod alias;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod schema;
pub mod search;
pub mod similarity;

pub use alias::AliasTable;
pub use matcher::{MatchThresholds, Matcher, QueryMode};
pub use models::{CanonicalRecord, Corpus, RawRecord};
pub use normalize::Normalizer;
pub use schema::Field;
pub use search::{SearchEngine, SearchOutcome};
pub use similarity::{IndelSimilarity, LevenshteinSimilarity, Similarity};
