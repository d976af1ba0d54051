//! The canonical record schema.
//!
//! Every normalized record exposes exactly these fields, in this order.
//! Labels follow the source data's conventions and are what the CLI
//! prints; keys are the stable snake_case identifiers used in
//! configuration files and JSON output.

use std::fmt;
use std::str::FromStr;

/// One attribute of a canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Address,
    Gender,
    BirthDate,
    Position,
    MotherName,
    NationalId,
    EmployeeId,
    BankAccount,
    StudentId,
    Phone,
    Email,
    FatherPhone,
    MotherPhone,
}

impl Field {
    /// All canonical fields in display order.
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Address,
        Field::Gender,
        Field::BirthDate,
        Field::Position,
        Field::MotherName,
        Field::NationalId,
        Field::EmployeeId,
        Field::BankAccount,
        Field::StudentId,
        Field::Phone,
        Field::Email,
        Field::FatherPhone,
        Field::MotherPhone,
    ];

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nama",
            Field::Address => "Alamat",
            Field::Gender => "Gender",
            Field::BirthDate => "Tanggal Lahir",
            Field::Position => "Jabatan",
            Field::MotherName => "Nama Ibu",
            Field::NationalId => "NIK",
            Field::EmployeeId => "NIP",
            Field::BankAccount => "NOMOR REKENING",
            Field::StudentId => "NISN",
            Field::Phone => "Nomor Hp",
            Field::Email => "Email",
            Field::FatherPhone => "Nomor AYAH",
            Field::MotherPhone => "Nomor IBU",
        }
    }

    /// Snake_case key used in config files and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Gender => "gender",
            Field::BirthDate => "birth_date",
            Field::Position => "position",
            Field::MotherName => "mother_name",
            Field::NationalId => "national_id",
            Field::EmployeeId => "employee_id",
            Field::BankAccount => "bank_account",
            Field::StudentId => "student_id",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::FatherPhone => "father_phone",
            Field::MotherPhone => "mother_phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts either the snake_case key or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_index_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_keys_and_labels_unique() {
        let mut keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 14);

        let mut labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!("phone".parse::<Field>().unwrap(), Field::Phone);
        assert_eq!("Nomor Hp".parse::<Field>().unwrap(), Field::Phone);
        assert_eq!("NIK".parse::<Field>().unwrap(), Field::NationalId);
        assert_eq!(" birth_date ".parse::<Field>().unwrap(), Field::BirthDate);
        assert!("shoe_size".parse::<Field>().is_err());
    }
}
