use serde::{Deserialize, Serialize};

use crate::issue::{FieldWarning, WarningKind};
use crate::record::RecordKind;

/// Closest known alias for a sample name that had no accession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSuggestion {
    pub sample_name: String,
    pub closest_alias: String,
    pub similarity: f64,
}

/// Outcome of one pass, handed back to the caller for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub record_kind: RecordKind,
    /// Rows considered.
    pub processed: usize,
    /// Entries written to the output document.
    pub emitted: usize,
    /// Records with at least one defaulted mandatory field.
    pub defaulted: usize,
    /// Rows excluded because their sample had no accession.
    pub skipped: usize,
    pub skipped_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<AliasSuggestion>,
    pub warnings: Vec<FieldWarning>,
}

impl SubmissionSummary {
    pub fn new(record_kind: RecordKind) -> Self {
        Self {
            record_kind,
            processed: 0,
            emitted: 0,
            defaulted: 0,
            skipped: 0,
            skipped_names: Vec::new(),
            suggestions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Folds one record's warnings into the batch totals.
    pub fn absorb(&mut self, warnings: Vec<FieldWarning>) {
        if warnings
            .iter()
            .any(|warning| matches!(warning.kind, WarningKind::MandatoryDefaulted { .. }))
        {
            self.defaulted += 1;
        }
        self.warnings.extend(warnings);
    }

    pub fn record_skip(&mut self, sample_name: impl Into<String>) {
        self.skipped += 1;
        self.skipped_names.push(sample_name.into());
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_skips(&self) -> bool {
        self.skipped > 0
    }
}
