//! Experiment/run pipeline: build records, resolve sample accessions.

use faire_model::{
    Checked, EXPERIMENT_RUN_SHEET, ExperimentRunRecord, FaireError, RecordKind, ResolvedRun,
    Sheet, SubmissionSummary,
};
use faire_standards::FieldDictionary;
use faire_validate::build_run_record;
use tracing::{debug, info, info_span};

use crate::accession::AccessionTable;

/// Resolved rows in input order, plus the folded summary.
#[derive(Debug, Clone)]
pub struct RunBatch {
    pub resolved: Vec<ResolvedRun>,
    pub summary: SubmissionSummary,
}

/// Builds one record per row that names a sample. Rows with an empty
/// sample name are ignored.
pub fn build_run_records(
    sheet: &Sheet,
    dictionary: &FieldDictionary,
) -> Result<Vec<Checked<ExperimentRunRecord>>, FaireError> {
    let sample_column = &dictionary.identifiers.run_sample_name;
    if !sheet.has_column(sample_column) {
        return Err(FaireError::MissingColumn {
            sheet: EXPERIMENT_RUN_SHEET.to_string(),
            column: sample_column.clone(),
        });
    }
    Ok(sheet
        .rows
        .iter()
        .filter_map(|row| {
            let record = build_run_record(row, dictionary);
            if record.is_none() {
                debug!(line = row.line, "run row without sample name ignored");
            }
            record
        })
        .collect())
}

/// Pairs each record with its sample accession.
///
/// Records whose sample is not in the table are left out and named in the
/// summary, with a near-miss alias hint when one exists.
pub fn resolve_runs(
    records: Vec<Checked<ExperimentRunRecord>>,
    table: &AccessionTable,
    assay: Option<&str>,
) -> RunBatch {
    let span = info_span!("runs", rows = records.len(), receipt_aliases = table.len());
    let _guard = span.enter();

    let mut summary = SubmissionSummary::new(RecordKind::Run);
    let mut resolved = Vec::with_capacity(records.len());
    for checked in records {
        summary.processed += 1;
        let record = checked.value;
        match table.get(&record.sample_name) {
            Some(accession) => {
                debug!(sample = %record.sample_name, accession, "resolved sample accession");
                summary.absorb(checked.warnings);
                resolved.push(ResolvedRun::new(record, accession.to_string(), assay));
            }
            None => {
                debug!(sample = %record.sample_name, "no accession for sample, run skipped");
                if let Some(suggestion) = table.closest(&record.sample_name) {
                    summary.suggestions.push(suggestion);
                }
                summary.record_skip(record.sample_name);
            }
        }
    }
    summary.emitted = resolved.len();
    info!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        "run resolution complete"
    );
    RunBatch { resolved, summary }
}

/// Builds and resolves the experiment/run sheet in one call.
pub fn process_runs(
    sheet: &Sheet,
    dictionary: &FieldDictionary,
    table: &AccessionTable,
    assay: Option<&str>,
) -> Result<RunBatch, FaireError> {
    let records = build_run_records(sheet, dictionary)?;
    Ok(resolve_runs(records, table, assay))
}
