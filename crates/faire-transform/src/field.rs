//! Applies a dictionary field rule to one row.

use faire_model::{ProjectMetadata, Row, SampleCategory, WarningKind};
use faire_standards::{FieldRule, FieldSpec, Scope};

use crate::normalization::{
    Axis, DateCheck, check_date, compose_measurement, normalize_coordinate, normalize_integer,
    qualify, truncate_region,
};

/// Result of normalizing a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    /// Final value; `None` when the source is absent or unusable.
    pub value: Option<String>,
    /// `UNITS` annotation for the emitted attribute.
    pub units: Option<String>,
    /// Defect found while normalizing.
    pub issue: Option<WarningKind>,
}

impl Normalized {
    fn absent() -> Self {
        Self::default()
    }

    fn present(value: String, units: Option<String>) -> Self {
        Self {
            value: Some(value),
            units,
            issue: None,
        }
    }

    fn with_issue(mut self, issue: WarningKind) -> Self {
        self.issue = Some(issue);
        self
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Raw source text for a field, from the row or the project metadata.
pub fn source_value(spec: &FieldSpec, row: &Row, project: &ProjectMetadata) -> Option<String> {
    match spec.scope {
        Scope::Row => row.text(&spec.source),
        Scope::Project => project
            .get(&spec.source)
            .map(|value| value.trim().to_string()),
    }
}

/// Turns a raw cell plus its field rule into a final `(value, units)` pair.
pub fn normalize_field(spec: &FieldSpec, row: &Row, project: &ProjectMetadata) -> Normalized {
    let raw = source_value(spec, row, project);

    if spec.rule == FieldRule::ControlFlag {
        let category = SampleCategory::from_token(raw.as_deref());
        return Normalized::present(category.control_flag().to_string(), None);
    }

    let Some(raw) = raw else {
        return Normalized::absent();
    };
    let units = spec.units.clone();

    match spec.rule {
        FieldRule::Text | FieldRule::Md5 | FieldRule::ControlFlag => {
            Normalized::present(raw, units)
        }
        FieldRule::Date => match check_date(&raw) {
            DateCheck::Invalid => Normalized::present(DateCheck::Invalid.into_value(), units)
                .with_issue(WarningKind::InvalidDate { raw }),
            valid => Normalized::present(valid.into_value(), units),
        },
        FieldRule::GeoRegion => match truncate_region(&raw) {
            Some(region) => Normalized::present(region, units),
            None => Normalized::absent(),
        },
        FieldRule::Latitude | FieldRule::Longitude => {
            let axis = if spec.rule == FieldRule::Latitude {
                Axis::Latitude
            } else {
                Axis::Longitude
            };
            match normalize_coordinate(&raw, axis) {
                Some(value) => Normalized::present(value, units),
                None => Normalized::absent().with_issue(WarningKind::InvalidCoordinate { raw }),
            }
        }
        FieldRule::Measurement => {
            let unit = spec
                .unit_column
                .as_deref()
                .and_then(|column| row.text(column));
            let measurement =
                compose_measurement(&raw, unit.as_deref(), spec.default_unit.as_deref());
            let units = if spec.emit_units {
                Some(measurement.unit.clone())
            } else {
                units
            };
            let normalized = Normalized::present(measurement.value.clone(), units);
            if measurement.unit_missing {
                normalized.with_issue(WarningKind::MissingUnit { value: raw })
            } else {
                normalized
            }
        }
        FieldRule::Qualified => {
            let qualifier = spec
                .qualifier_column
                .as_deref()
                .and_then(|column| row.text(column));
            Normalized::present(qualify(&raw, qualifier.as_deref()), units)
        }
        FieldRule::Integer => match normalize_integer(&raw) {
            Some(value) => Normalized::present(value, units),
            None => Normalized::present(raw.clone(), units)
                .with_issue(WarningKind::InvalidInteger { raw }),
        },
    }
}
