//! `dossier sources`: list discovered source files and how each loaded.
//!
//! Each source gets one row: `OK` with its raw and named record counts, or
//! `SKIPPED` with the read or parse error.

use anyhow::Result;

use crate::config::Config;
use crate::loader::{self, SourceStatus};

pub fn list_sources(config: &Config) -> Result<()> {
    let root = &config.sources.root;
    if !root.is_dir() {
        println!("Source directory not found: {}", root.display());
        return Ok(());
    }

    let outcome = loader::load_configured(config)?;
    if outcome.reports.is_empty() {
        println!("No source files found in {}", root.display());
        return Ok(());
    }

    println!("{:<32} {:<10} {:>8} {:>8}", "SOURCE", "STATUS", "RECORDS", "NAMED");
    for report in &outcome.reports {
        match &report.status {
            SourceStatus::Loaded { records, kept } => {
                println!("{:<32} {:<10} {:>8} {:>8}", report.id, "OK", records, kept);
            }
            SourceStatus::Skipped(e) => {
                println!("{:<32} {:<10} {}", report.id, "SKIPPED", e);
            }
        }
    }
    println!();
    println!("total records: {}", outcome.corpus.len());

    Ok(())
}
