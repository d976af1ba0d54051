//! `dossier search "<query>"`: one-shot lookup.

use anyhow::Result;
use std::io::Write;

use crate::config::Config;
use crate::display;
use crate::loader;

pub fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let engine = config.search_engine()?;
    let outcome = loader::load_configured(config)?;

    if query.trim().is_empty() || outcome.corpus.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("No results.");
        }
        return Ok(());
    }

    let result = engine.execute(&outcome.corpus, query);
    tracing::debug!(mode = %result.mode, hits = result.hits.len(), "search finished");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        display::write_json(&mut out, &result.hits)?;
    } else {
        display::write_outcome(&mut out, &result)?;
    }
    out.flush()?;

    Ok(())
}
