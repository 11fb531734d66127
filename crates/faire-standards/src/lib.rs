#![deny(unsafe_code)]

pub mod dictionary;
pub mod error;
pub mod paths;

pub use crate::dictionary::{
    Checklist, FORWARD_CHECKSUM, FORWARD_FILENAME, FieldDictionary, FieldRule, FieldSpec,
    Identifiers, Placement, REVERSE_CHECKSUM, REVERSE_FILENAME, Scope,
};
pub use crate::error::StandardsError;
pub use crate::paths::{
    BUNDLED_DICTIONARY, DICTIONARY_ENV_VAR, dictionary_override, load_bundled_dictionary,
    load_dictionary,
};
