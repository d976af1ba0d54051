//! Typed per-source load failures.

use std::io;

use thiserror::Error;

/// Why a single source was skipped during loading.
///
/// A source error never aborts a load; the loader records it and moves on.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read source '{source_id}': {error}")]
    Io {
        source_id: String,
        #[source]
        error: io::Error,
    },
    #[error("cannot parse source '{source_id}': {error}")]
    Parse {
        source_id: String,
        #[source]
        error: serde_json::Error,
    },
}

impl SourceError {
    pub fn source_id(&self) -> &str {
        match self {
            SourceError::Io { source_id, .. } | SourceError::Parse { source_id, .. } => source_id,
        }
    }
}
