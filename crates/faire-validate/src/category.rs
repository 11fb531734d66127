//! Category-specific defaulting.

use faire_model::SampleCategory;
use faire_standards::{Checklist, FieldSpec};
use faire_transform::normalization::NOT_PROVIDED;

/// How a record fills a missing mandatory field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultingStrategy<'a> {
    /// True samples take the field's configured default and are flagged.
    FieldDefault,
    /// Controls take the checklist's control missing-value literal.
    ControlLiteral(&'a str),
}

impl<'a> DefaultingStrategy<'a> {
    pub fn for_category(category: SampleCategory, checklist: &'a Checklist) -> Self {
        match category {
            SampleCategory::TrueSample => DefaultingStrategy::FieldDefault,
            SampleCategory::Control => {
                DefaultingStrategy::ControlLiteral(&checklist.control_missing_value)
            }
        }
    }

    /// Substitute for a missing mandatory field.
    pub fn substitute(&self, spec: &FieldSpec) -> String {
        match self {
            DefaultingStrategy::FieldDefault => spec
                .default
                .clone()
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            DefaultingStrategy::ControlLiteral(literal) => (*literal).to_string(),
        }
    }

    /// Whether a substitution is reported as a warning.
    pub fn reports_substitution(&self) -> bool {
        matches!(self, DefaultingStrategy::FieldDefault)
    }
}
