//! Export the normalized corpus as JSON.
//!
//! Writes every loaded record (populated fields plus `source`) as a
//! pretty-printed array. Useful for checking how sources were mapped onto
//! the canonical schema.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use dossier_core::CanonicalRecord;

use crate::config::Config;
use crate::loader;

#[derive(Serialize)]
struct ExportData<'a> {
    sources: Vec<ExportSource<'a>>,
    records: &'a [CanonicalRecord],
}

#[derive(Serialize)]
struct ExportSource<'a> {
    id: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Export the corpus. Writes to `output` if given, otherwise to stdout.
pub fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let outcome = loader::load_configured(config)?;

    let sources = outcome
        .reports
        .iter()
        .map(|r| match &r.status {
            loader::SourceStatus::Loaded { .. } => ExportSource {
                id: &r.id,
                status: "ok",
                error: None,
            },
            loader::SourceStatus::Skipped(e) => ExportSource {
                id: &r.id,
                status: "skipped",
                error: Some(e.to_string()),
            },
        })
        .collect();

    let data = ExportData {
        sources,
        records: outcome.corpus.records(),
    };
    let json = serde_json::to_string_pretty(&data)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            eprintln!(
                "Exported {} records from {} sources to {}",
                outcome.corpus.len(),
                outcome.reports.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
