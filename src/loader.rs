//! Corpus loading.
//!
//! Reads every source, splits its JSON into raw records, normalizes each
//! one, and keeps the records that resolved a name. A source that cannot be
//! read or parsed is skipped and reported; it never aborts the load.
//!
//! Record shapes per source:
//!
//! | Top-level JSON | Records |
//! |----------------|---------|
//! | object         | that object |
//! | array          | each object element (other elements skipped) |
//! | anything else  | none |

use anyhow::Result;
use serde_json::Value;

use dossier_core::{CanonicalRecord, Corpus, Normalizer, RawRecord};

use crate::config::Config;
use crate::connector_fs;
use crate::errors::SourceError;

/// Something that yields one JSON document of records.
pub trait RecordSource {
    /// Provenance identifier stamped on every record from this source.
    fn id(&self) -> &str;

    fn read_json(&self) -> Result<Value, SourceError>;
}

/// What happened to one source during a load.
#[derive(Debug)]
pub enum SourceStatus {
    Loaded {
        /// Raw records found in the source.
        records: usize,
        /// Of those, records that resolved a name.
        kept: usize,
    },
    Skipped(SourceError),
}

#[derive(Debug)]
pub struct SourceReport {
    pub id: String,
    pub status: SourceStatus,
}

/// The loaded corpus plus a per-source account of the load.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub corpus: Corpus,
    pub reports: Vec<SourceReport>,
}

impl LoadOutcome {
    pub fn skipped(&self) -> impl Iterator<Item = &SourceError> {
        self.reports.iter().filter_map(|r| match &r.status {
            SourceStatus::Skipped(e) => Some(e),
            SourceStatus::Loaded { .. } => None,
        })
    }
}

/// Load all `sources` in order into a corpus.
pub fn load<S: RecordSource>(sources: &[S], normalizer: &Normalizer) -> LoadOutcome {
    let mut records: Vec<CanonicalRecord> = Vec::new();
    let mut reports = Vec::with_capacity(sources.len());

    for source in sources {
        let id = source.id();
        let value = match source.read_json() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(source = %id, "skipping source: {}", e);
                reports.push(SourceReport {
                    id: id.to_string(),
                    status: SourceStatus::Skipped(e),
                });
                continue;
            }
        };

        let raw = split_records(id, value);
        let total = raw.len();
        let before = records.len();
        records.extend(
            raw.iter()
                .map(|r| normalizer.normalize(r, id))
                .filter(|r| !r.name().is_empty()),
        );
        let kept = records.len() - before;

        tracing::debug!(source = %id, total, kept, "loaded source");
        reports.push(SourceReport {
            id: id.to_string(),
            status: SourceStatus::Loaded {
                records: total,
                kept,
            },
        });
    }

    LoadOutcome {
        corpus: Corpus::from_records(records),
        reports,
    }
}

/// Discover and load the sources named by `config`.
///
/// A missing source directory is reported and yields an empty outcome.
pub fn load_configured(config: &Config) -> Result<LoadOutcome> {
    let normalizer = config.normalizer()?;

    let root = &config.sources.root;
    if !root.is_dir() {
        tracing::warn!("Source directory not found: {}", root.display());
        return Ok(LoadOutcome::default());
    }

    let files = connector_fs::scan_sources(&config.sources)?;
    if files.is_empty() {
        tracing::warn!("No source files found in {}", root.display());
    }

    Ok(load(&files, &normalizer))
}

fn split_records(id: &str, value: Value) -> Vec<RawRecord> {
    match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Value::Object(map) => Some(map),
                _ => {
                    tracing::debug!(source = %id, index = i, "skipping non-object array element");
                    None
                }
            })
            .collect(),
        _ => {
            tracing::debug!(source = %id, "top-level value is neither object nor array");
            Vec::new()
        }
    }
}
