//! Field-level defects.
//!
//! These never abort a record: the value is repaired or defaulted in place
//! and the defect is carried back to the caller as a `FieldWarning`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// Mandatory field was absent or invalid and received a substitute value.
    MandatoryDefaulted { value: String },
    /// Date did not match an accepted shape or was not a calendar date.
    InvalidDate { raw: String },
    /// Measurement had no companion unit.
    MissingUnit { value: String },
    /// Coordinate was not a number in range.
    InvalidCoordinate { raw: String },
    /// Value expected to be an integer was not.
    InvalidInteger { raw: String },
    /// Read file has no filename and was dropped from the run.
    MissingFile,
    /// Read file has no checksum.
    MissingChecksum { filename: String },
    /// Checksum is not 32 hexadecimal characters.
    MalformedChecksum { filename: String, checksum: String },
}

impl WarningKind {
    pub fn code(&self) -> &'static str {
        match self {
            WarningKind::MandatoryDefaulted { .. } => "mandatory_defaulted",
            WarningKind::InvalidDate { .. } => "invalid_date",
            WarningKind::MissingUnit { .. } => "missing_unit",
            WarningKind::InvalidCoordinate { .. } => "invalid_coordinate",
            WarningKind::InvalidInteger { .. } => "invalid_integer",
            WarningKind::MissingFile => "missing_file",
            WarningKind::MissingChecksum { .. } => "missing_checksum",
            WarningKind::MalformedChecksum { .. } => "malformed_checksum",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MandatoryDefaulted { value } => {
                write!(f, "mandatory value missing, defaulted to '{value}'")
            }
            WarningKind::InvalidDate { raw } => {
                write!(f, "invalid date '{raw}', replaced with 'not provided'")
            }
            WarningKind::MissingUnit { value } => {
                write!(f, "value '{value}' has no unit, marked as unknown")
            }
            WarningKind::InvalidCoordinate { raw } => write!(f, "invalid coordinate '{raw}'"),
            WarningKind::InvalidInteger { raw } => write!(f, "'{raw}' is not an integer"),
            WarningKind::MissingFile => f.write_str("no filename, file omitted from run"),
            WarningKind::MissingChecksum { filename } => {
                write!(f, "no MD5 checksum for '{filename}'")
            }
            WarningKind::MalformedChecksum { filename, checksum } => {
                write!(f, "checksum '{checksum}' for '{filename}' is not an MD5 digest")
            }
        }
    }
}

/// A field-level defect attributed to a record and field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    /// Record alias (sample name for experiment/run rows).
    pub record: String,
    /// Target attribute name.
    pub field: String,
    #[serde(flatten)]
    pub kind: WarningKind,
}

impl FieldWarning {
    pub fn new(record: impl Into<String>, field: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            record: record.into(),
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.record, self.field, self.kind)
    }
}

/// A value paired with the warnings produced while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked<T> {
    pub value: T,
    pub warnings: Vec<FieldWarning>,
}

impl<T> Checked<T> {
    pub fn new(value: T, warnings: Vec<FieldWarning>) -> Self {
        Self { value, warnings }
    }

    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }
}
