//! Raw cell grids and header-row detection shared by both loaders.

use faire_model::{CellValue, Row, Sheet};
use tracing::debug;

/// Rows inspected when looking for the header.
const HEADER_PROBE_ROWS: usize = 10;

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_header(cell: &CellValue) -> String {
    cell.as_text()
        .map(|text| normalize_header(&text))
        .unwrap_or_default()
}

/// Index of the header row: the first row naming `anchor`, else row 0.
///
/// FAIRe templates put requirement-level and section rows above the
/// column names.
pub(crate) fn detect_header_row(grid: &[Vec<CellValue>], anchor: &str) -> usize {
    grid.iter()
        .take(HEADER_PROBE_ROWS)
        .position(|row| row.iter().any(|cell| cell_header(cell) == anchor))
        .unwrap_or(0)
}

/// Builds a sheet from a raw grid. Fully empty rows are dropped; row line
/// numbers are 1-based positions in the grid.
pub(crate) fn sheet_from_grid(name: &str, grid: Vec<Vec<CellValue>>, anchor: &str) -> Sheet {
    let header_index = detect_header_row(&grid, anchor);
    let mut rows = grid.into_iter().enumerate().skip(header_index);
    let columns: Vec<String> = rows
        .next()
        .map(|(_, header)| header.iter().map(cell_header).collect())
        .unwrap_or_default();
    debug!(
        sheet = name,
        header_row = header_index + 1,
        columns = columns.len(),
        "detected header row"
    );

    let mut sheet = Sheet::new(name, columns);
    for (index, cells) in rows {
        if cells.iter().all(CellValue::is_empty) {
            continue;
        }
        let mut row = Row::new(index + 1);
        for (column, cell) in sheet.columns.iter().zip(cells) {
            if column.is_empty() {
                continue;
            }
            row.insert(column.clone(), cell);
        }
        sheet.push_row(row);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| CellValue::text(*cell)).collect()
    }

    #[test]
    fn header_below_template_rows() {
        let grid = vec![
            text_row(&["# requirement_level_code", "M", "HR"]),
            text_row(&["# section", "Sample collection", ""]),
            text_row(&["samp_name", "eventDate", "samp_category"]),
            text_row(&["S1", "2019-10-16", "sample"]),
            text_row(&["", "", ""]),
            text_row(&["NC1", "", "negative control"]),
        ];
        let sheet = sheet_from_grid("sampleMetadata", grid, "samp_name");
        assert_eq!(sheet.columns, vec!["samp_name", "eventDate", "samp_category"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].line, 4);
        assert_eq!(sheet.rows[1].line, 6);
        assert_eq!(sheet.rows[1].text("samp_name").as_deref(), Some("NC1"));
        assert_eq!(sheet.rows[1].text("eventDate"), None);
    }

    #[test]
    fn falls_back_to_first_row() {
        let grid = vec![text_row(&["a", "b"]), text_row(&["1", "2"])];
        assert_eq!(detect_header_row(&grid, "samp_name"), 0);
    }

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} samp_name "), "samp_name");
        assert_eq!(normalize_header("lib  conc"), "lib conc");
    }
}
