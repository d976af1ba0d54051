//! TOML configuration.
//!
//! Every section is optional; an absent section takes the defaults below.
//! When the default config path does not exist the built-in defaults are
//! used, so `dossier` runs with no config file at all.
//!
//! ```toml
//! [sources]
//! root = "./database"
//! include_globs = ["*.json"]
//!
//! [matching]
//! scorer = "indel"
//! full_name_threshold = 95
//!
//! [[aliases]]
//! alias = "no_telp"
//! field = "phone"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dossier_core::{
    AliasTable, Field, IndelSimilarity, LevenshteinSimilarity, MatchThresholds, Matcher,
    Normalizer, SearchEngine, Similarity,
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            recursive: false,
            follow_symlinks: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("./database")
}

fn default_include_globs() -> Vec<String> {
    vec!["*.json".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    #[serde(default = "default_scorer")]
    pub scorer: String,
    #[serde(default = "default_full_name_threshold")]
    pub full_name_threshold: f64,
    #[serde(default = "default_partial_threshold")]
    pub partial_threshold: f64,
    #[serde(default = "default_token_threshold")]
    pub token_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            scorer: default_scorer(),
            full_name_threshold: default_full_name_threshold(),
            partial_threshold: default_partial_threshold(),
            token_threshold: default_token_threshold(),
        }
    }
}

fn default_scorer() -> String {
    "indel".to_string()
}
fn default_full_name_threshold() -> f64 {
    95.0
}
fn default_partial_threshold() -> f64 {
    80.0
}
fn default_token_threshold() -> f64 {
    85.0
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NormalizeConfig {
    /// Name keys tried after the built-in priority list.
    #[serde(default)]
    pub extra_name_keys: Vec<String>,
}

/// One extra alias, appended after the built-in table.
#[derive(Debug, Deserialize, Clone)]
pub struct AliasConfig {
    pub alias: String,
    /// Canonical field key (`phone`) or label (`Nomor Hp`).
    pub field: String,
}

impl MatchingConfig {
    pub fn thresholds(&self) -> MatchThresholds {
        MatchThresholds {
            full_name: self.full_name_threshold,
            partial: self.partial_threshold,
            token: self.token_threshold,
        }
    }

    pub fn similarity(&self) -> Result<Arc<dyn Similarity>> {
        match self.scorer.as_str() {
            "indel" => Ok(Arc::new(IndelSimilarity)),
            "levenshtein" => Ok(Arc::new(LevenshteinSimilarity)),
            other => bail!(
                "Unknown matching.scorer: '{}'. Must be indel or levenshtein.",
                other
            ),
        }
    }
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Alias table: built-ins followed by configured `[[aliases]]`.
    pub fn alias_table(&self) -> Result<AliasTable> {
        let mut table = AliasTable::builtin();
        for entry in &self.aliases {
            let field: Field = entry
                .field
                .parse()
                .with_context(|| format!("Invalid field for alias '{}'", entry.alias))?;
            if !table.insert(&entry.alias, field) {
                tracing::debug!(alias = %entry.alias, "alias already defined, keeping first");
            }
        }
        Ok(table)
    }

    pub fn normalizer(&self) -> Result<Normalizer> {
        Ok(Normalizer::new(self.alias_table()?)
            .with_name_keys(&self.normalize.extra_name_keys))
    }

    pub fn search_engine(&self) -> Result<SearchEngine> {
        let matcher = Matcher::new(self.matching.similarity()?, self.matching.thresholds());
        Ok(SearchEngine::new(matcher))
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Load `path` if it exists; otherwise use defaults when `allow_missing`.
pub fn load_or_default(path: &Path, allow_missing: bool) -> Result<Config> {
    if allow_missing && !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::minimal());
    }
    load_config(path)
}

fn validate(config: &Config) -> Result<()> {
    let m = &config.matching;
    for (name, value) in [
        ("matching.full_name_threshold", m.full_name_threshold),
        ("matching.partial_threshold", m.partial_threshold),
        ("matching.token_threshold", m.token_threshold),
    ] {
        if !(0.0..=100.0).contains(&value) {
            bail!("{} must be in [0, 100], got {}", name, value);
        }
    }

    m.similarity()?;

    if config.sources.include_globs.is_empty() {
        bail!("sources.include_globs must not be empty");
    }

    config.alias_table()?;

    Ok(())
}
