//! The FAIRe → ENA field dictionary.
//!
//! The dictionary is data: which source column feeds which ENA attribute,
//! which attributes are mandatory, what they default to, and which carry
//! units. Checklist changes are edits to the TOML file, not to code.

#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use faire_model::RecordKind;

use crate::error::StandardsError;

/// Target names the run builder looks up in the `[[run]]` table.
pub const FORWARD_FILENAME: &str = "forward_filename";
pub const FORWARD_CHECKSUM: &str = "forward_checksum";
pub const REVERSE_FILENAME: &str = "reverse_filename";
pub const REVERSE_CHECKSUM: &str = "reverse_checksum";

const RUN_TARGETS: [&str; 4] = [
    FORWARD_FILENAME,
    FORWARD_CHECKSUM,
    REVERSE_FILENAME,
    REVERSE_CHECKSUM,
];

/// Per-field value transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    #[default]
    Text,
    /// ISO 8601 date, year-month, year or timestamp.
    Date,
    /// Keep only the text before the first colon.
    GeoRegion,
    Latitude,
    Longitude,
    /// Value composed with a companion unit column.
    Measurement,
    /// Value with an optional parenthesised qualifier column.
    Qualified,
    Integer,
    /// Category token rendered as the TRUE/FALSE control flag.
    ControlFlag,
    Md5,
}

impl FieldRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRule::Text => "text",
            FieldRule::Date => "date",
            FieldRule::GeoRegion => "geo_region",
            FieldRule::Latitude => "latitude",
            FieldRule::Longitude => "longitude",
            FieldRule::Measurement => "measurement",
            FieldRule::Qualified => "qualified",
            FieldRule::Integer => "integer",
            FieldRule::ControlFlag => "control_flag",
            FieldRule::Md5 => "md5",
        }
    }
}

/// Where a field's source value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    Row,
    /// Project-level key/value pairs.
    Project,
}

/// Where an experiment field ends up in the EXPERIMENT document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Attribute,
    /// Part of `LIBRARY_CONSTRUCTION_PROTOCOL`.
    Protocol,
}

/// One source → target mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub rule: FieldRule,
    #[serde(default)]
    pub mandatory: bool,
    /// Substitute for a missing mandatory value on true samples.
    pub default: Option<String>,
    /// Companion column holding the unit of a measurement.
    pub unit_column: Option<String>,
    /// Unit assumed when the companion column is empty.
    pub default_unit: Option<String>,
    /// Literal `UNITS` emitted for this attribute.
    pub units: Option<String>,
    /// Emit the companion unit as `UNITS`.
    #[serde(default)]
    pub emit_units: bool,
    pub qualifier_column: Option<String>,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub placement: Placement,
    /// Human label used in the library construction protocol.
    pub label: Option<String>,
}

impl FieldSpec {
    /// Whether the attribute carries a `UNITS` annotation.
    pub fn has_units(&self) -> bool {
        self.units.is_some() || self.emit_units
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub default_taxon_id: String,
    pub control_missing_value: String,
}

/// Structural columns: primary identifiers and the category token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub sample_alias: String,
    pub sample_category: String,
    pub run_sample_name: String,
    pub run_library_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDictionary {
    pub checklist: Checklist,
    pub identifiers: Identifiers,
    #[serde(default)]
    pub sample: Vec<FieldSpec>,
    #[serde(default)]
    pub experiment: Vec<FieldSpec>,
    #[serde(default)]
    pub run: Vec<FieldSpec>,
}

impl FieldDictionary {
    /// Parses and checks a dictionary. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, StandardsError> {
        let dictionary: FieldDictionary =
            toml::from_str(text).map_err(|source| StandardsError::Toml {
                origin: origin.to_string(),
                source,
            })?;
        dictionary.check()?;
        Ok(dictionary)
    }

    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let text = std::fs::read_to_string(path).map_err(|err| StandardsError::io(path, err))?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    pub fn fields(&self, kind: RecordKind) -> &[FieldSpec] {
        match kind {
            RecordKind::Sample => &self.sample,
            RecordKind::Experiment => &self.experiment,
            RecordKind::Run => &self.run,
        }
    }

    /// Target attribute names fed by a source column, in declared order.
    /// Empty for unmapped columns.
    pub fn targets_for<'a, 's>(
        &'a self,
        kind: RecordKind,
        source: &'s str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 's> {
        self.fields(kind)
            .iter()
            .filter(move |spec| spec.source == source)
            .map(|spec| spec.target.as_str())
    }

    pub fn target_for(&self, kind: RecordKind, source: &str) -> Option<&str> {
        self.targets_for(kind, source).next()
    }

    pub fn field(&self, kind: RecordKind, target: &str) -> Option<&FieldSpec> {
        self.fields(kind).iter().find(|spec| spec.target == target)
    }

    pub fn mandatory(&self, kind: RecordKind) -> impl Iterator<Item = &FieldSpec> {
        self.fields(kind).iter().filter(|spec| spec.mandatory)
    }

    pub fn unit_fields(&self, kind: RecordKind) -> impl Iterator<Item = &FieldSpec> {
        self.fields(kind).iter().filter(|spec| spec.has_units())
    }

    pub fn default_for(&self, kind: RecordKind, target: &str) -> Option<&str> {
        self.field(kind, target)
            .and_then(|spec| spec.default.as_deref())
    }

    /// Consistency checks applied on every load.
    pub fn check(&self) -> Result<(), StandardsError> {
        if self.checklist.control_missing_value.trim().is_empty() {
            return Err(StandardsError::BlankControlValue);
        }
        for kind in RecordKind::ALL {
            let mut seen = BTreeSet::new();
            for spec in self.fields(kind) {
                if spec.source.trim().is_empty() {
                    return Err(StandardsError::EmptySource {
                        kind,
                        target: spec.target.clone(),
                    });
                }
                if !seen.insert(spec.target.as_str()) {
                    return Err(StandardsError::DuplicateTarget {
                        kind,
                        target: spec.target.clone(),
                    });
                }
                if spec.rule == FieldRule::Measurement && spec.unit_column.is_none() {
                    return Err(missing_rule_key(kind, spec, "unit_column"));
                }
                if spec.rule == FieldRule::Qualified && spec.qualifier_column.is_none() {
                    return Err(missing_rule_key(kind, spec, "qualifier_column"));
                }
                if spec.emit_units && spec.unit_column.is_none() {
                    return Err(missing_rule_key(kind, spec, "unit_column"));
                }
                if spec.mandatory && spec.default.is_none() {
                    return Err(StandardsError::MissingDefault {
                        kind,
                        target: spec.target.clone(),
                    });
                }
                if spec
                    .default
                    .as_deref()
                    .is_some_and(|value| value.trim().is_empty())
                {
                    return Err(StandardsError::BlankDefault {
                        kind,
                        target: spec.target.clone(),
                    });
                }
            }
        }
        for target in RUN_TARGETS {
            if self.field(RecordKind::Run, target).is_none() {
                return Err(StandardsError::MissingRunTarget { target });
            }
        }
        Ok(())
    }
}

fn missing_rule_key(kind: RecordKind, spec: &FieldSpec, key: &'static str) -> StandardsError {
    StandardsError::MissingRuleKey {
        kind,
        target: spec.target.clone(),
        rule: spec.rule.as_str(),
        key,
    }
}
