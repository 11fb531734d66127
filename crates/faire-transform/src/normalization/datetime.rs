//! Collection date validation.
//!
//! Accepted shapes are `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
//! `YYYY-MM-DDTHH:MM[:SS]` with an optional `Z` or UTC offset. Anything that
//! matches a shape but is not a real calendar date (month `00`, day `31` in
//! April) is rejected, as is anything matching no shape at all. The INSDC
//! missing-value terms pass through unchanged.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Literal substituted for an invalid date.
pub const NOT_PROVIDED: &str = "not provided";

/// INSDC missing-value vocabulary, lowercase.
pub const MISSING_VALUE_TERMS: &[&str] = &[
    "not applicable",
    "not collected",
    "not provided",
    "restricted access",
    "missing: control sample",
    "missing: sample group",
    "missing: synthetic construct",
    "missing: lab stock",
    "missing: third party data",
    "missing: data agreement established pre-2023",
    "missing: endangered species",
    "missing: human-identifiable",
];

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<year>\d{4})(?:-(?<month>\d{2})(?:-(?<day>\d{2})(?:[T ](?<hour>\d{2}):(?<minute>\d{2})(?::(?<second>\d{2})(?<fraction>\.\d+)?)?(?<zone>Z|[+-]\d{2}:?\d{2})?)?)?)?$",
    )
    .expect("Invalid date regex")
});

/// Outcome of validating one date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    /// Valid date, in canonical form.
    Valid(String),
    /// One of the INSDC missing-value terms, canonical lowercase.
    MissingValue(&'static str),
    /// Not a date; the caller substitutes [`NOT_PROVIDED`].
    Invalid,
}

impl DateCheck {
    /// The value to emit, with invalid dates replaced.
    pub fn into_value(self) -> String {
        match self {
            DateCheck::Valid(value) => value,
            DateCheck::MissingValue(term) => term.to_string(),
            DateCheck::Invalid => NOT_PROVIDED.to_string(),
        }
    }
}

/// Returns the canonical missing-value term if `value` is one.
pub fn missing_value_term(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    MISSING_VALUE_TERMS
        .iter()
        .copied()
        .find(|term| term.eq_ignore_ascii_case(trimmed))
}

pub fn is_missing_value(value: &str) -> bool {
    missing_value_term(value).is_some()
}

/// Validates a collection date.
///
/// A space between date and time is rewritten to `T`; every other valid
/// input is returned verbatim.
pub fn check_date(value: &str) -> DateCheck {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DateCheck::Invalid;
    }
    if let Some(term) = missing_value_term(trimmed) {
        return DateCheck::MissingValue(term);
    }
    let Some(caps) = DATE_PATTERN.captures(trimmed) else {
        return DateCheck::Invalid;
    };

    let field = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());
    let Some(year) = caps
        .name("year")
        .and_then(|m| m.as_str().parse::<i32>().ok())
    else {
        return DateCheck::Invalid;
    };
    match (field("month"), field("day")) {
        (None, _) => {}
        (Some(month), None) => {
            if !(1..=12).contains(&month) {
                return DateCheck::Invalid;
            }
        }
        (Some(month), Some(day)) => {
            if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                return DateCheck::Invalid;
            }
        }
    }
    if let (Some(hour), Some(minute)) = (field("hour"), field("minute")) {
        let second = field("second").unwrap_or(0);
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return DateCheck::Invalid;
        }
    }

    DateCheck::Valid(trimmed.replacen(' ', "T", 1))
}

/// Validated date or [`NOT_PROVIDED`].
pub fn normalize_date(value: &str) -> String {
    check_date(value).into_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_shape() {
        for value in [
            "2019",
            "2019-10",
            "2019-10-16",
            "2019-10-16T00:00:00",
            "2019-10-16T08:15",
            "2019-10-16T08:15:30Z",
            "2019-10-16T08:15:30+08:00",
        ] {
            assert_eq!(check_date(value), DateCheck::Valid(value.to_string()), "{value}");
        }
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        for value in [
            "2019-00",
            "2019-13",
            "2019-00-00",
            "2019-02-30",
            "2019-00-00T00:00:00",
            "2019-10-16T25:00:00",
        ] {
            assert_eq!(check_date(value), DateCheck::Invalid, "{value}");
        }
    }

    #[test]
    fn date_pattern_names_every_component() {
        let names: Vec<&str> = DATE_PATTERN.capture_names().flatten().collect();
        assert_eq!(
            names,
            vec!["year", "month", "day", "hour", "minute", "second", "fraction", "zone"]
        );
    }

    #[test]
    fn rejects_other_shapes() {
        for value in ["", "16/10/2019", "Oct 2019", "19-10-16", "2019-1-6", "20191016"] {
            assert_eq!(check_date(value), DateCheck::Invalid, "{value}");
        }
    }

    #[test]
    fn space_separator_becomes_t() {
        assert_eq!(
            check_date("2019-10-16 08:15:00"),
            DateCheck::Valid("2019-10-16T08:15:00".to_string())
        );
    }

    #[test]
    fn missing_values_pass_through() {
        assert_eq!(normalize_date("not provided"), "not provided");
        assert_eq!(normalize_date("not collected"), "not collected");
        assert_eq!(normalize_date("Not Collected"), "not collected");
        assert_eq!(
            normalize_date("missing: control sample"),
            "missing: control sample"
        );
    }
}
