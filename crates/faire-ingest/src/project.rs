//! Project-level key/value pairs.

use faire_model::{ProjectMetadata, Sheet};

/// Column naming the project term.
pub const TERM_COLUMN: &str = "term_name";
/// Column holding the project-wide value.
pub const VALUE_COLUMN: &str = "project_level";

/// Flattens the project sheet into term → value pairs.
///
/// Values come from `project_level`, or from the column right after
/// `term_name` when there is none. Terms without a value are skipped.
pub fn project_metadata(sheet: &Sheet) -> ProjectMetadata {
    let mut metadata = ProjectMetadata::default();
    let value_column = if sheet.has_column(VALUE_COLUMN) {
        Some(VALUE_COLUMN.to_string())
    } else {
        sheet
            .columns
            .iter()
            .position(|column| column == TERM_COLUMN)
            .and_then(|index| sheet.columns.get(index + 1))
            .cloned()
    };
    let Some(value_column) = value_column else {
        return metadata;
    };
    for row in &sheet.rows {
        if let (Some(term), Some(value)) = (row.text(TERM_COLUMN), row.text(&value_column)) {
            metadata.insert(term, value);
        }
    }
    metadata
}
