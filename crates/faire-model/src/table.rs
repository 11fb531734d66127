#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// FAIRe sheet names.
pub const SAMPLE_SHEET: &str = "sampleMetadata";
pub const EXPERIMENT_RUN_SHEET: &str = "experimentRunMetadata";
pub const PROJECT_SHEET: &str = "projectMetadata";

/// A raw scalar cell as delivered by a sheet loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Builds a text cell, collapsing blank strings to `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(number) => number.is_nan(),
            CellValue::Empty => true,
        }
    }

    /// Renders the cell as display text; `None` for empty cells.
    ///
    /// Numbers drop trailing zeros so `1.0` renders as `1` and `2.50` as `2.5`.
    /// Text holding a plain decimal gets the same treatment, so a CSV cell
    /// and a workbook number render alike.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| canonical_decimal(trimmed))
            }
            CellValue::Number(number) if number.is_finite() => Some(format_number(*number)),
            CellValue::Number(_) | CellValue::Empty => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Drops trailing fractional zeros from a plain decimal (`-?digits.digits`).
/// Anything else is returned unchanged.
fn canonical_decimal(text: &str) -> String {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let Some((whole, fraction)) = unsigned.split_once('.') else {
        return text.to_string();
    };
    let plain = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !plain(whole) || !plain(fraction) {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.trim_start_matches('-').bytes().all(|b| b == b'0') {
        return "0".to_string();
    }
    trimmed.to_string()
}

/// One spreadsheet row keyed by column name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row number in the source sheet, for diagnostics.
    pub line: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            cells: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Trimmed, non-empty text of a column.
    pub fn text(&self, column: &str) -> Option<String> {
        self.cells.get(column).and_then(CellValue::as_text)
    }
}

/// An ordered sheet of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }
}

/// Project-level key/value pairs (the `projectMetadata` sheet).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub values: BTreeMap<String, String>,
}

impl ProjectMetadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}
