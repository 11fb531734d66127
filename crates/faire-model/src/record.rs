use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three ENA record types produced from a FAIRe workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Sample,
    Experiment,
    Run,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Sample, RecordKind::Experiment, RecordKind::Run];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Sample => "sample",
            RecordKind::Experiment => "experiment",
            RecordKind::Run => "run",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(RecordKind::Sample),
            "experiment" => Ok(RecordKind::Experiment),
            "run" => Ok(RecordKind::Run),
            _ => Err(format!("Unknown record kind: {s}")),
        }
    }
}

/// Whether a sample row is a biological sample or a control (blank,
/// negative/positive control).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    TrueSample,
    Control,
}

impl SampleCategory {
    /// Token in the source category column that marks a true sample.
    pub const SAMPLE_TOKEN: &'static str = "sample";

    /// Any token other than `sample` (including an empty cell) is a control.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(value) if value.trim().eq_ignore_ascii_case(Self::SAMPLE_TOKEN) => {
                SampleCategory::TrueSample
            }
            _ => SampleCategory::Control,
        }
    }

    /// Literal emitted for the `control_sample` attribute.
    pub fn control_flag(&self) -> &'static str {
        match self {
            SampleCategory::TrueSample => "FALSE",
            SampleCategory::Control => "TRUE",
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self, SampleCategory::Control)
    }
}

/// A `(tag, value, units?)` triple destined for an ENA attribute list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub tag: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Attribute {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            units: None,
        }
    }

    #[must_use]
    pub fn with_units(mut self, units: Option<String>) -> Self {
        self.units = units;
        self
    }
}

/// A normalized and validated sample row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub alias: String,
    pub taxon_id: String,
    pub category: SampleCategory,
    /// Attributes in dictionary-declared order.
    pub attributes: Vec<Attribute>,
}

impl SampleRecord {
    pub fn attribute(&self, tag: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.tag == tag)
    }

    pub fn value(&self, tag: &str) -> Option<&str> {
        self.attribute(tag).map(|attribute| attribute.value.as_str())
    }
}

/// A read file listed in a RUN's data block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub checksum: String,
}

/// A normalized experiment/run row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRunRecord {
    /// Foreign key into `SampleRecord::alias`.
    pub sample_name: String,
    pub library_id: Option<String>,
    pub forward: Option<FileDescriptor>,
    pub reverse: Option<FileDescriptor>,
    /// `(label, value)` parts of the library construction protocol.
    pub protocol: Vec<(String, String)>,
    /// Optional experiment attributes in dictionary order.
    pub attributes: Vec<Attribute>,
}

impl ExperimentRunRecord {
    pub fn files(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.forward.iter().chain(self.reverse.iter())
    }

    /// Experiment alias: library id, else sample name, plus an optional
    /// assay suffix.
    pub fn experiment_alias(&self, assay: Option<&str>) -> String {
        let base = self.library_id.as_deref().unwrap_or(&self.sample_name);
        match assay.map(str::trim).filter(|value| !value.is_empty()) {
            Some(assay) => format!("{base}_{assay}"),
            None => base.to_string(),
        }
    }

    /// Library construction protocol text, `None` when no parts are present.
    pub fn construction_protocol(&self) -> Option<String> {
        if self.protocol.is_empty() {
            return None;
        }
        Some(
            self.protocol
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// An experiment/run row paired with its sample accession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRun {
    pub record: ExperimentRunRecord,
    pub sample_accession: String,
    pub experiment_alias: String,
    pub run_alias: String,
}

impl ResolvedRun {
    pub fn new(record: ExperimentRunRecord, sample_accession: String, assay: Option<&str>) -> Self {
        let experiment_alias = record.experiment_alias(assay);
        let run_alias = format!("{experiment_alias}_run");
        Self {
            record,
            sample_accession,
            experiment_alias,
            run_alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(library_id: Option<&str>) -> ExperimentRunRecord {
        ExperimentRunRecord {
            sample_name: "S1".to_string(),
            library_id: library_id.map(str::to_string),
            forward: None,
            reverse: None,
            protocol: Vec::new(),
            attributes: Vec::new(),
        }
    }

    #[test]
    fn category_token() {
        assert_eq!(SampleCategory::from_token(Some("sample")), SampleCategory::TrueSample);
        assert_eq!(SampleCategory::from_token(Some(" Sample ")), SampleCategory::TrueSample);
        assert_eq!(SampleCategory::from_token(Some("negative control")), SampleCategory::Control);
        assert_eq!(SampleCategory::from_token(None), SampleCategory::Control);
    }

    #[test]
    fn experiment_alias_falls_back_to_sample_name() {
        assert_eq!(run(Some("LIB1")).experiment_alias(None), "LIB1");
        assert_eq!(run(None).experiment_alias(None), "S1");
        assert_eq!(run(Some("LIB1")).experiment_alias(Some("16S")), "LIB1_16S");
        assert_eq!(run(Some("LIB1")).experiment_alias(Some("  ")), "LIB1");
    }

    #[test]
    fn resolved_run_alias() {
        let resolved = ResolvedRun::new(run(Some("LIB1")), "ERS1".to_string(), Some("COI"));
        assert_eq!(resolved.experiment_alias, "LIB1_COI");
        assert_eq!(resolved.run_alias, "LIB1_COI_run");
    }

    #[test]
    fn protocol_joins_parts() {
        let mut record = run(None);
        assert_eq!(record.construction_protocol(), None);
        record.protocol = vec![
            ("Library concentration".to_string(), "2.5 ng/uL".to_string()),
            ("Quantification method".to_string(), "Qubit".to_string()),
        ];
        assert_eq!(
            record.construction_protocol().as_deref(),
            Some("Library concentration: 2.5 ng/uL; Quantification method: Qubit")
        );
    }
}
