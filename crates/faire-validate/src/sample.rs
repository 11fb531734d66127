//! Sample record validation.
//!
//! Every dictionary field is normalized, then the record's category decides
//! what happens to missing values:
//!
//! | category     | mandatory, missing          | optional, missing |
//! |--------------|-----------------------------|-------------------|
//! | true sample  | field default + warning     | omitted           |
//! | control      | `missing: control sample`   | omitted           |
//!
//! The control flag attribute always reflects the category.

use faire_model::{
    Attribute, Checked, FaireError, FieldWarning, ProjectMetadata, Row, SAMPLE_SHEET,
    SampleCategory, SampleRecord, WarningKind,
};
use faire_standards::{FieldDictionary, FieldRule};
use faire_transform::normalize_field;
use tracing::debug;

use crate::category::DefaultingStrategy;

/// Tag of the trailing checklist attribute.
pub const CHECKLIST_TAG: &str = "ENA-CHECKLIST";

/// Validates one sample row.
///
/// Fails only when the row has no alias; field defects come back as
/// warnings alongside the record.
pub fn validate_sample(
    row: &Row,
    dictionary: &FieldDictionary,
    project: &ProjectMetadata,
    taxon_id: &str,
) -> Result<Checked<SampleRecord>, FaireError> {
    let identifiers = &dictionary.identifiers;
    let alias = row
        .text(&identifiers.sample_alias)
        .ok_or_else(|| FaireError::MissingIdentifier {
            sheet: SAMPLE_SHEET.to_string(),
            line: row.line,
            column: identifiers.sample_alias.clone(),
        })?;
    let category = SampleCategory::from_token(row.text(&identifiers.sample_category).as_deref());
    let strategy = DefaultingStrategy::for_category(category, &dictionary.checklist);

    let mut attributes = Vec::new();
    let mut warnings = Vec::new();
    for spec in &dictionary.sample {
        if spec.rule == FieldRule::ControlFlag {
            attributes.push(Attribute::new(&spec.target, category.control_flag()));
            continue;
        }

        let normalized = normalize_field(spec, row, project);
        if let Some(issue) = normalized.issue {
            warnings.push(FieldWarning::new(&alias, &spec.target, issue));
        }
        match normalized.value {
            Some(value) => {
                attributes.push(Attribute::new(&spec.target, value).with_units(normalized.units));
            }
            None if spec.mandatory => {
                let value = strategy.substitute(spec);
                if strategy.reports_substitution() {
                    warnings.push(FieldWarning::new(
                        &alias,
                        &spec.target,
                        WarningKind::MandatoryDefaulted {
                            value: value.clone(),
                        },
                    ));
                } else {
                    debug!(
                        alias = %alias,
                        field = %spec.target,
                        "control sample field left missing"
                    );
                }
                attributes.push(Attribute::new(&spec.target, value));
            }
            None => {}
        }
    }
    attributes.push(Attribute::new(CHECKLIST_TAG, &dictionary.checklist.id));

    Ok(Checked::new(
        SampleRecord {
            alias,
            taxon_id: taxon_id.to_string(),
            category,
            attributes,
        },
        warnings,
    ))
}
