use std::path::PathBuf;

use faire_model::{ReceiptEntry, SubmissionSummary};
use serde::Serialize;

/// Outcome of one `samples` or `runs` invocation.
#[derive(Debug, Serialize)]
pub struct CommandResult {
    pub command: &'static str,
    pub input: PathBuf,
    pub dry_run: bool,
    /// Documents written, or that would have been written on a dry run.
    pub outputs: Vec<PathBuf>,
    pub summaries: Vec<SubmissionSummary>,
    /// Receipt entries (accession and BioSample) of the samples runs point at.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accessions: Vec<ReceiptEntry>,
}

impl CommandResult {
    pub fn warning_count(&self) -> usize {
        self.summaries
            .iter()
            .map(SubmissionSummary::warning_count)
            .sum()
    }
}
