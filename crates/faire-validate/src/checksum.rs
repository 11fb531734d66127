use std::sync::LazyLock;

use regex::Regex;

static MD5_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("Invalid md5 regex"));

/// Whether `value` is a 32-character hexadecimal MD5 digest.
pub fn is_md5(value: &str) -> bool {
    MD5_PATTERN.is_match(value.trim())
}
