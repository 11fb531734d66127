//! Sample pipeline: normalize, validate, reject duplicate aliases.

use std::collections::HashMap;

use faire_model::{FaireError, RecordKind, SAMPLE_SHEET, SampleRecord, Sheet, SubmissionSummary};
use faire_validate::validate_sample;
use tracing::{debug, info, info_span};

use crate::context::PipelineContext;

/// Validated samples in input order, plus the folded summary.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    pub records: Vec<SampleRecord>,
    pub summary: SubmissionSummary,
}

/// Runs every row of the sample sheet through the validator.
///
/// A row without an alias, or an alias seen twice, aborts the batch.
pub fn process_samples(
    sheet: &Sheet,
    context: &PipelineContext,
) -> Result<SampleBatch, FaireError> {
    let span = info_span!("samples", rows = sheet.rows.len());
    let _guard = span.enter();

    let alias_column = &context.dictionary.identifiers.sample_alias;
    if !sheet.has_column(alias_column) {
        return Err(FaireError::MissingColumn {
            sheet: SAMPLE_SHEET.to_string(),
            column: alias_column.clone(),
        });
    }

    let mut summary = SubmissionSummary::new(RecordKind::Sample);
    let mut records = Vec::with_capacity(sheet.rows.len());
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for row in &sheet.rows {
        let checked = validate_sample(
            row,
            &context.dictionary,
            &context.project,
            &context.taxon_id,
        )?;
        let record = checked.value;
        if let Some(&first_line) = first_seen.get(&record.alias) {
            return Err(FaireError::DuplicateAlias {
                alias: record.alias,
                first_line,
                line: row.line,
            });
        }
        first_seen.insert(record.alias.clone(), row.line);
        debug!(
            alias = %record.alias,
            category = ?record.category,
            warnings = checked.warnings.len(),
            "validated sample"
        );
        summary.processed += 1;
        summary.absorb(checked.warnings);
        records.push(record);
    }
    summary.emitted = records.len();
    info!(
        samples = summary.emitted,
        defaulted = summary.defaulted,
        warnings = summary.warning_count(),
        "sample pipeline complete"
    );
    Ok(SampleBatch { records, summary })
}
