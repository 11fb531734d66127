//! A folder holding one CSV file per FAIRe sheet.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use faire_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};
use crate::grid::sheet_from_grid;

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|err| IngestError::io(dir, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| IngestError::io(dir, err))?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// The CSV file whose stem names `sheet`, ignoring case.
pub fn find_sheet_file<'a>(files: &'a [PathBuf], sheet: &str) -> Option<&'a PathBuf> {
    files.iter().find(|path| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.trim().eq_ignore_ascii_case(sheet))
    })
}

/// Reads a headerless grid of text cells from a CSV file.
pub fn read_csv_grid(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        grid.push(record.iter().map(CellValue::text).collect());
    }
    Ok(grid)
}

pub fn read_csv_sheet(path: &Path, sheet: &str, anchor: &str) -> Result<Sheet> {
    Ok(sheet_from_grid(sheet, read_csv_grid(path)?, anchor))
}
