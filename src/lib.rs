//! # Dossier
//!
//! A local-first lookup tool for semi-structured personal records.
//!
//! Dossier reads JSON record files from a directory, maps their
//! inconsistent field names onto one canonical schema, and answers
//! lookups by full name or nickname with fuzzy matching.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────┐
//! │ JSON files  │──▶│  Normalizer  │──▶│  Corpus  │
//! │ (database/) │   │ alias table  │   │ in memory│
//! └─────────────┘   └──────────────┘   └────┬─────┘
//!                                           │
//!                      ┌────────────────────┤
//!                      ▼                    ▼
//!                 ┌──────────┐        ┌──────────┐
//!                 │  shell   │        │  search  │
//!                 │  (REPL)  │        │ / export │
//!                 └──────────┘        └──────────┘
//! ```
//!
//! The normalization and matching logic lives in the `dossier-core`
//! crate; this crate adds configuration, file discovery, loading, and the
//! CLI surfaces.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`connector_fs`] | Source file discovery |
//! | [`loader`] | Corpus loading and per-source reports |
//! | [`display`] | Terminal and JSON rendering |
//! | [`shell`] | Interactive lookup loop |
//! | [`search_cmd`] | One-shot search command |
//! | [`sources`] | Source listing command |
//! | [`export`] | Corpus export command |
//! | [`logging`] | Diagnostic subscriber setup |

pub mod config;
pub mod connector_fs;
pub mod display;
pub mod errors;
pub mod export;
pub mod loader;
pub mod logging;
pub mod search_cmd;
pub mod shell;
pub mod sources;
