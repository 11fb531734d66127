#![deny(unsafe_code)]

use std::path::PathBuf;

use faire_model::RecordKind;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse field dictionary {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {kind} target '{target}' in field dictionary")]
    DuplicateTarget { kind: RecordKind, target: String },

    #[error("{kind} field '{target}' uses rule '{rule}' but has no {key}")]
    MissingRuleKey {
        kind: RecordKind,
        target: String,
        rule: &'static str,
        key: &'static str,
    },

    #[error("mandatory {kind} field '{target}' has no default value")]
    MissingDefault { kind: RecordKind, target: String },

    #[error("{kind} field '{target}' has a blank default value")]
    BlankDefault { kind: RecordKind, target: String },

    #[error("checklist control_missing_value must not be blank")]
    BlankControlValue,

    #[error("run fields must include target '{target}'")]
    MissingRunTarget { target: &'static str },

    #[error("{kind} field '{target}' has an empty source column")]
    EmptySource { kind: RecordKind, target: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
