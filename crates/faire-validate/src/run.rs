//! Experiment/run row checks.

use faire_model::{
    Attribute, Checked, ExperimentRunRecord, FieldWarning, FileDescriptor, ProjectMetadata,
    RecordKind, Row, WarningKind,
};
use faire_standards::{
    FORWARD_CHECKSUM, FORWARD_FILENAME, FieldDictionary, Placement, REVERSE_CHECKSUM,
    REVERSE_FILENAME,
};
use faire_transform::normalize_field;

use crate::checksum::is_md5;

/// Builds the experiment/run record for one row.
///
/// Rows without a sample name yield `None` and are ignored by the caller.
pub fn build_run_record(
    row: &Row,
    dictionary: &FieldDictionary,
) -> Option<Checked<ExperimentRunRecord>> {
    let identifiers = &dictionary.identifiers;
    let sample_name = row.text(&identifiers.run_sample_name)?;
    let project = ProjectMetadata::default();
    let mut warnings = Vec::new();

    let mut protocol = Vec::new();
    let mut attributes = Vec::new();
    for spec in dictionary.fields(RecordKind::Experiment) {
        let normalized = normalize_field(spec, row, &project);
        if let Some(issue) = normalized.issue {
            warnings.push(FieldWarning::new(&sample_name, &spec.target, issue));
        }
        let Some(value) = normalized.value else {
            continue;
        };
        match spec.placement {
            Placement::Protocol => protocol.push((spec.display_label().to_string(), value)),
            Placement::Attribute => attributes.push(Attribute::new(&spec.target, value)),
        }
    }

    let run_value = |target: &str| {
        dictionary
            .field(RecordKind::Run, target)
            .and_then(|spec| normalize_field(spec, row, &project).value)
    };
    let forward = check_file(
        &sample_name,
        FORWARD_FILENAME,
        run_value(FORWARD_FILENAME),
        run_value(FORWARD_CHECKSUM),
        &mut warnings,
    );
    let reverse = check_file(
        &sample_name,
        REVERSE_FILENAME,
        run_value(REVERSE_FILENAME),
        run_value(REVERSE_CHECKSUM),
        &mut warnings,
    );

    Some(Checked::new(
        ExperimentRunRecord {
            sample_name,
            library_id: row.text(&identifiers.run_library_id),
            forward,
            reverse,
            protocol,
            attributes,
        },
        warnings,
    ))
}

/// A file without a filename is dropped; a missing or malformed checksum is
/// kept as-is and flagged.
fn check_file(
    record: &str,
    field: &str,
    filename: Option<String>,
    checksum: Option<String>,
    warnings: &mut Vec<FieldWarning>,
) -> Option<FileDescriptor> {
    let Some(filename) = filename else {
        warnings.push(FieldWarning::new(record, field, WarningKind::MissingFile));
        return None;
    };
    let checksum = checksum.unwrap_or_default();
    if checksum.is_empty() {
        warnings.push(FieldWarning::new(
            record,
            field,
            WarningKind::MissingChecksum {
                filename: filename.clone(),
            },
        ));
    } else if !is_md5(&checksum) {
        warnings.push(FieldWarning::new(
            record,
            field,
            WarningKind::MalformedChecksum {
                filename: filename.clone(),
                checksum: checksum.clone(),
            },
        ));
    }
    Some(FileDescriptor { filename, checksum })
}
