//! Core data models: raw source records, canonical records, and the corpus.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::schema::Field;

/// A record exactly as read from a source: arbitrary keys, JSON values.
///
/// Key order is the order the keys appeared in the source document.
pub type RawRecord = Map<String, Value>;

/// A normalized record: one value per canonical field plus provenance.
///
/// Only [`Normalizer`](crate::Normalizer) builds these, so every field is
/// always present (possibly empty) and the name is trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    values: [String; 14],
    source: String,
}

impl CanonicalRecord {
    pub(crate) fn empty(source: &str) -> Self {
        Self {
            values: Default::default(),
            source: source.to_string(),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    pub(crate) fn is_set(&self, field: Field) -> bool {
        !self.values[field.index()].is_empty()
    }

    /// Value of `field`, empty if the source had nothing for it.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    /// Identifier of the source this record was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All fields in canonical order, including empty ones.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Only the fields that carry a value, in canonical order.
    pub fn populated(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields().filter(|(_, v)| !v.is_empty())
    }
}

/// JSON shape: snake_case field keys for populated fields, then `source`.
impl Serialize for CanonicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.populated() {
            map.serialize_entry(field.key(), value)?;
        }
        map.serialize_entry("source", &self.source)?;
        map.end()
    }
}

/// Ordered, read-only collection of named canonical records.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<CanonicalRecord>,
}

impl Corpus {
    /// Build a corpus, dropping any record without a name.
    pub fn from_records(records: impl IntoIterator<Item = CanonicalRecord>) -> Self {
        Self {
            records: records.into_iter().filter(|r| !r.name().is_empty()).collect(),
        }
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CanonicalRecord;
    type IntoIter = std::slice::Iter<'a, CanonicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Render a raw JSON value as the string stored in a canonical field.
///
/// `null` renders as an empty string; strings are used as-is; everything
/// else uses its compact JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
