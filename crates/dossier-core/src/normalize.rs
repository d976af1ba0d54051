//! Record normalization: raw source records → canonical records.
//!
//! # Algorithm
//!
//! 1. Start with every canonical field empty and the provenance set.
//! 2. Resolve the subject's name from a prioritized list of name keys,
//!    then from any key containing `NAMA` or `NAME`. The winner is trimmed
//!    and upper-cased.
//! 3. Map every other non-blank value through the [`AliasTable`]: exact
//!    hit first, substring fallback on a miss. A field keeps the first
//!    value written to it.
//!
//! Step 3 only reaches the name field when step 2 found nothing, and then
//! stores the value upper-cased like step 2 would. Keys that map nowhere
//! are dropped without error.

use crate::alias::{normalize_key, AliasTable};
use crate::models::{value_to_string, CanonicalRecord, RawRecord};
use crate::schema::Field;

/// Name keys in priority order, compared against upper-cased raw keys.
pub const NAME_KEYS: &[&str] = &[
    "NAMA",
    "NAME",
    "NAMA LENGKAP",
    "NAMA_LENGKAP",
    "FULL_NAME",
    "NAMA_LGKP",
    "NAMA LGKP",
    "PEGAWAI",
    "EMPLOYEE",
    "NAMA_PEGAWAI",
];

/// Substrings that mark a key as name-like when no priority key matched.
const NAME_MARKERS: &[&str] = &["NAMA", "NAME"];

/// Converts raw records into canonical records.
///
/// Holds the alias table and name-key list it was built with; both are
/// fixed for the lifetime of the normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: AliasTable,
    name_keys: Vec<String>,
}

impl Normalizer {
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases,
            name_keys: NAME_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Append extra name keys after the built-in priority list.
    pub fn with_name_keys<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in extra {
            let key = key.as_ref().trim().to_uppercase();
            if !key.is_empty() && !self.name_keys.contains(&key) {
                self.name_keys.push(key);
            }
        }
        self
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn name_keys(&self) -> &[String] {
        &self.name_keys
    }

    /// Normalize one raw record read from `source_id`.
    pub fn normalize(&self, raw: &RawRecord, source_id: &str) -> CanonicalRecord {
        let mut record = CanonicalRecord::empty(source_id);

        if let Some(name) = self.resolve_name(raw) {
            record.set(Field::Name, name);
        }

        for (raw_key, raw_value) in raw {
            let value = value_to_string(raw_value);
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let key = normalize_key(raw_key);
            if key.is_empty() {
                continue;
            }

            let target = match self.aliases.canonicalize(&key) {
                Some(field) => Some(field).filter(|f| !record.is_set(*f)),
                None => self
                    .aliases
                    .fallback_matches(&key)
                    .find(|f| !record.is_set(*f)),
            };

            match target {
                Some(Field::Name) => record.set(Field::Name, value.to_uppercase()),
                Some(field) => record.set(field, value.to_string()),
                None => {}
            }
        }

        record
    }

    /// Find the subject's name, trimmed and upper-cased.
    fn resolve_name(&self, raw: &RawRecord) -> Option<String> {
        let non_blank = |value: &serde_json::Value| {
            let s = value_to_string(value);
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_uppercase())
        };

        for wanted in &self.name_keys {
            let hit = raw
                .iter()
                .filter(|(k, _)| k.trim().to_uppercase() == *wanted)
                .find_map(|(_, v)| non_blank(v));
            if hit.is_some() {
                return hit;
            }
        }

        raw.iter()
            .filter(|(k, _)| {
                let upper = k.to_uppercase();
                NAME_MARKERS.iter().any(|m| upper.contains(m))
            })
            .find_map(|(_, v)| non_blank(v))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}
