//! Filesystem source discovery.
//!
//! Walks `sources.root`, keeps files that match an include glob and no
//! exclude glob, and returns them sorted by relative path so loading is
//! deterministic. Only the top level is scanned unless
//! `sources.recursive` is set.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SourcesConfig;
use crate::errors::SourceError;
use crate::loader::RecordSource;

/// A JSON file discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    /// Path relative to the source root; used as provenance.
    pub id: String,
    pub path: PathBuf,
}

impl JsonFile {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

impl RecordSource for JsonFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_json(&self) -> Result<Value, SourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|error| SourceError::Io {
            source_id: self.id.clone(),
            error,
        })?;
        serde_json::from_str(&text).map_err(|error| SourceError::Parse {
            source_id: self.id.clone(),
            error,
        })
    }
}

/// List source files under the configured root.
///
/// Fails if the root does not exist; callers treat that as an empty
/// corpus rather than a crash.
pub fn scan_sources(config: &SourcesConfig) -> Result<Vec<JsonFile>> {
    let root = &config.root;
    if !root.is_dir() {
        bail!("Source directory not found: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;
    let exclude_set = build_globset(&config.exclude_globs)?;

    let mut walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable path under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel_str = relative_id(root, path);

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(JsonFile::new(rel_str, path));
    }

    files.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(files)
}

fn relative_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
