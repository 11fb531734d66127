//! Spreadsheet workbooks via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveTime;
use faire_model::{CellValue, Sheet};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::grid::sheet_from_grid;

pub const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Converts a calamine cell. Dates render as `YYYY-MM-DD`, or with a time
/// part when not midnight.
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::String(value) => CellValue::text(value.as_str()),
        Data::Bool(value) => CellValue::text(value.to_string()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(stamp) if stamp.time() == NaiveTime::MIN => {
                CellValue::text(stamp.format("%Y-%m-%d").to_string())
            }
            Some(stamp) => CellValue::text(stamp.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => CellValue::Number(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::text(value.as_str()),
        Data::Error(error) => {
            debug!(?error, "cell error treated as empty");
            CellValue::Empty
        }
        Data::Empty => CellValue::Empty,
    }
}

/// Named sheets of an open workbook.
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Loads the requested sheets (case-insensitive); absent ones are skipped.
    ///
    /// `wanted` pairs a sheet name with the column that anchors its header.
    pub fn load(path: &Path, wanted: &[(&str, &str)]) -> Result<Self> {
        let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
        let names = workbook.sheet_names();
        let mut sheets = Vec::new();
        for (sheet, anchor) in wanted {
            let Some(actual) = names.iter().find(|name| name.eq_ignore_ascii_case(sheet)) else {
                debug!(sheet, "sheet not present in workbook");
                continue;
            };
            let range = workbook
                .worksheet_range(actual)
                .map_err(|source| IngestError::Workbook {
                    path: path.to_path_buf(),
                    source,
                })?;
            let grid: Vec<Vec<CellValue>> = range
                .rows()
                .map(|row| row.iter().map(cell_from_data).collect())
                .collect();
            sheets.push(sheet_from_grid(sheet, grid, anchor));
        }
        Ok(Self { sheets })
    }

    pub fn take(&mut self, name: &str) -> Option<Sheet> {
        let index = self.sheets.iter().position(|sheet| sheet.name == name)?;
        Some(self.sheets.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_scalar_cells() {
        assert_eq!(cell_from_data(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(
            cell_from_data(&Data::String("  ".to_string())),
            CellValue::Empty
        );
        assert_eq!(
            cell_from_data(&Data::DateTimeIso("2019-10-16".to_string())),
            CellValue::Text("2019-10-16".to_string())
        );
        assert_eq!(cell_from_data(&Data::Empty), CellValue::Empty);
    }

    #[test]
    fn workbook_extensions() {
        assert!(is_workbook(Path::new("faire.xlsx")));
        assert!(is_workbook(Path::new("FAIRE.ODS")));
        assert!(!is_workbook(Path::new("faire.csv")));
        assert!(!is_workbook(Path::new("faire")));
    }
}
