//! Alias table: observed source field names → canonical fields.
//!
//! Lookup is two-tier. [`AliasTable::canonicalize`] does an exact,
//! case-insensitive lookup of the trimmed key. When that misses, the
//! normalizer walks [`AliasTable::fallback_matches`], which scans every
//! alias in definition order and yields those that contain the key or are
//! contained by it.
//!
//! The substring tier is loose. Short aliases such as `hp` or
//! `ibu` are embedded in many longer keys, so a key can land on a field
//! its author did not intend. Matches are reported in definition order and
//! the normalizer takes the first usable one.

use std::collections::HashMap;

use crate::schema::Field;

const BUILTIN_ALIASES: &[(&str, Field)] = &[
    // name
    ("nama", Field::Name),
    ("name", Field::Name),
    ("nama lengkap", Field::Name),
    ("nama_lengkap", Field::Name),
    ("full_name", Field::Name),
    ("nama_lgkp", Field::Name),
    ("nama lgkp", Field::Name),
    // address
    ("alamat", Field::Address),
    ("address", Field::Address),
    ("domisili", Field::Address),
    ("address_full", Field::Address),
    // gender
    ("gender", Field::Gender),
    ("jenis_kelamin", Field::Gender),
    ("jenis klmin", Field::Gender),
    ("sex", Field::Gender),
    ("jk", Field::Gender),
    // birth date
    ("tanggal_lahir", Field::BirthDate),
    ("tgl_lahir", Field::BirthDate),
    ("birthdate", Field::BirthDate),
    ("tgl_lhr", Field::BirthDate),
    ("tgl lahir", Field::BirthDate),
    ("tanggal lahir", Field::BirthDate),
    ("birth_date", Field::BirthDate),
    // position
    ("jabatan", Field::Position),
    ("position", Field::Position),
    ("role", Field::Position),
    ("pangkat", Field::Position),
    ("tugas", Field::Position),
    ("title", Field::Position),
    // mother's name
    ("nama_ibu", Field::MotherName),
    ("ibu", Field::MotherName),
    ("nama ibu kandung", Field::MotherName),
    ("nama_lgkp_ibu", Field::MotherName),
    ("nama lgkp ibu", Field::MotherName),
    ("mother_name", Field::MotherName),
    // national id
    ("nik", Field::NationalId),
    ("no_ktp", Field::NationalId),
    ("ktp", Field::NationalId),
    ("identity_number", Field::NationalId),
    ("nik_ktp", Field::NationalId),
    ("id_card", Field::NationalId),
    // employee id
    ("nip", Field::EmployeeId),
    ("employee_id", Field::EmployeeId),
    ("pegawai_id", Field::EmployeeId),
    ("nip_pegawai", Field::EmployeeId),
    // bank account
    ("nomor_rekening", Field::BankAccount),
    ("no_rek", Field::BankAccount),
    ("rekening", Field::BankAccount),
    ("bank_account", Field::BankAccount),
    ("no_rek_pegawai", Field::BankAccount),
    ("account_number", Field::BankAccount),
    // student id
    ("nisn", Field::StudentId),
    ("student_id", Field::StudentId),
    ("no_induk_siswa", Field::StudentId),
    ("national_student_id", Field::StudentId),
    // phone
    ("nomor_hp", Field::Phone),
    ("no_hp", Field::Phone),
    ("phone", Field::Phone),
    ("hp", Field::Phone),
    ("phone_number", Field::Phone),
    ("contact", Field::Phone),
    ("sms_phone", Field::Phone),
    // email
    ("email", Field::Email),
    ("mail", Field::Email),
    ("e_mail", Field::Email),
    // father's phone
    ("nomor_ayah", Field::FatherPhone),
    ("no_ayah", Field::FatherPhone),
    ("father_phone", Field::FatherPhone),
    ("phone_ayah", Field::FatherPhone),
    ("hp_ayah", Field::FatherPhone),
    // mother's phone
    ("nomor_ibu", Field::MotherPhone),
    ("no_ibu", Field::MotherPhone),
    ("mother_phone", Field::MotherPhone),
    ("phone_ibu", Field::MotherPhone),
    ("hp_ibu", Field::MotherPhone),
];

/// Lower-case and trim a source key the way aliases are stored.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Many-to-one mapping from observed field names to canonical fields.
#[derive(Debug, Clone)]
pub struct AliasTable {
    exact: HashMap<String, Field>,
    ordered: Vec<(String, Field)>,
}

impl AliasTable {
    /// A table with no aliases at all.
    pub fn empty() -> Self {
        Self {
            exact: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// The hand-curated built-in aliases.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (alias, field) in BUILTIN_ALIASES {
            table.insert(alias, *field);
        }
        table
    }

    /// Append an alias after all existing ones.
    ///
    /// Returns `false` (and changes nothing) if the normalized alias is
    /// empty or already present, so an alias never maps to two fields.
    pub fn insert(&mut self, alias: &str, field: Field) -> bool {
        let key = normalize_key(alias);
        if key.is_empty() || self.exact.contains_key(&key) {
            return false;
        }
        self.exact.insert(key.clone(), field);
        self.ordered.push((key, field));
        true
    }

    /// Builder form of [`AliasTable::insert`].
    pub fn with_alias(mut self, alias: &str, field: Field) -> Self {
        self.insert(alias, field);
        self
    }

    /// Exact lookup of an observed key (case-insensitive, trimmed).
    pub fn canonicalize(&self, observed_key: &str) -> Option<Field> {
        self.exact.get(&normalize_key(observed_key)).copied()
    }

    /// Fields whose alias contains `key` or is contained in it, in
    /// definition order. `key` must already be normalized.
    pub fn fallback_matches<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Field> + 'a {
        self.ordered
            .iter()
            .filter(move |(pattern, _)| key.contains(pattern.as_str()) || pattern.contains(key))
            .map(|(_, field)| *field)
    }

    /// All aliases in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Field)> {
        self.ordered.iter().map(|(alias, field)| (alias.as_str(), *field))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
