use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use faire_model::SubmissionSummary;

use crate::types::CommandResult;

/// Skipped sample names listed before the remainder is only counted.
pub const SKIPPED_NAMES_SHOWN: usize = 10;

pub fn print_summary(result: &CommandResult) {
    println!("Input: {}", result.input.display());
    for path in &result.outputs {
        if result.dry_run {
            println!("Output (dry run, not written): {}", path.display());
        } else {
            println!("Output: {}", path.display());
        }
    }
    println!("{}", summary_table(&result.summaries));
    for summary in &result.summaries {
        if let Some(lines) = skipped_lines(summary) {
            println!();
            println!(
                "Skipped {} {} row(s) with no sample accession:",
                summary.skipped, summary.record_kind
            );
            for line in lines {
                println!("  {line}");
            }
        }
    }
}

pub fn summary_table(summaries: &[SubmissionSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Processed"),
        header_cell("Emitted"),
        header_cell("Defaulted"),
        header_cell("Skipped"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.record_kind)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.processed),
            Cell::new(summary.emitted),
            count_cell(summary.defaulted, Color::Yellow),
            count_cell(summary.skipped, Color::Red),
            count_cell(summary.warning_count(), Color::Yellow),
        ]);
    }
    table
}

/// Skipped names (first few), their near-miss hints, and a remainder line.
pub fn skipped_lines(summary: &SubmissionSummary) -> Option<Vec<String>> {
    if !summary.has_skips() {
        return None;
    }
    let mut lines: Vec<String> = summary
        .skipped_names
        .iter()
        .take(SKIPPED_NAMES_SHOWN)
        .map(|name| {
            match summary
                .suggestions
                .iter()
                .find(|suggestion| &suggestion.sample_name == name)
            {
                Some(suggestion) => format!(
                    "{name} (did you mean '{}'? similarity {:.2})",
                    suggestion.closest_alias, suggestion.similarity
                ),
                None => name.clone(),
            }
        })
        .collect();
    let remaining = summary.skipped_names.len().saturating_sub(SKIPPED_NAMES_SHOWN);
    if remaining > 0 {
        lines.push(format!("... and {remaining} more"));
    }
    Some(lines)
}

/// Listing tables keep every cell on one line so identifiers stay greppable.
pub fn apply_listing_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faire_model::{AliasSuggestion, RecordKind};

    fn run_summary(skipped: usize) -> SubmissionSummary {
        let mut summary = SubmissionSummary::new(RecordKind::Run);
        for index in 0..skipped {
            summary.record_skip(format!("S{index}"));
        }
        summary
    }

    #[test]
    fn no_skips_no_lines() {
        assert!(skipped_lines(&run_summary(0)).is_none());
    }

    #[test]
    fn long_skip_list_is_truncated() {
        let lines = skipped_lines(&run_summary(13)).expect("lines");
        assert_eq!(lines.len(), SKIPPED_NAMES_SHOWN + 1);
        assert_eq!(lines[0], "S0");
        assert_eq!(lines.last().map(String::as_str), Some("... and 3 more"));
    }

    #[test]
    fn suggestion_is_shown_next_to_name() {
        let mut summary = run_summary(1);
        summary.suggestions.push(AliasSuggestion {
            sample_name: "S0".to_string(),
            closest_alias: "S0_a".to_string(),
            similarity: 0.93,
        });
        let lines = skipped_lines(&summary).expect("lines");
        assert_eq!(lines, vec!["S0 (did you mean 'S0_a'? similarity 0.93)"]);
    }

    #[test]
    fn table_has_one_row_per_summary() {
        let table = summary_table(&[run_summary(2)]);
        assert_eq!(table.row_iter().count(), 1);
        assert!(table.to_string().contains("run"));
    }
}
