//! Field dictionary resolution.

use std::path::PathBuf;

use tracing::debug;

use crate::dictionary::FieldDictionary;
use crate::error::StandardsError;

/// Environment variable for overriding the bundled dictionary.
pub const DICTIONARY_ENV_VAR: &str = "FAIRE_DICTIONARY";

/// The ERC000024 dictionary compiled into the binary.
pub const BUNDLED_DICTIONARY: &str = include_str!("../../../standards/erc000024.toml");

/// Path of an externally supplied dictionary, if any.
///
/// Resolution order:
/// 1. explicit path (e.g. `--dictionary`)
/// 2. `FAIRE_DICTIONARY` environment variable
pub fn dictionary_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(DICTIONARY_ENV_VAR).map(PathBuf::from))
}

/// Load the bundled ERC000024 dictionary.
pub fn load_bundled_dictionary() -> Result<FieldDictionary, StandardsError> {
    FieldDictionary::from_toml_str(BUNDLED_DICTIONARY, "bundled erc000024.toml")
}

/// Load the dictionary from an override path, falling back to the bundled one.
pub fn load_dictionary(explicit: Option<PathBuf>) -> Result<FieldDictionary, StandardsError> {
    match dictionary_override(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading field dictionary");
            FieldDictionary::load(&path)
        }
        None => load_bundled_dictionary(),
    }
}
