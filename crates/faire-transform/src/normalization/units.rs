//! Measurement composition: a value cell plus its companion unit cell.

/// Unit recorded when the companion unit cell is empty.
pub const UNKNOWN_UNIT: &str = "unknown";

/// A composed measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Display value, `"<value> <unit>"`.
    pub value: String,
    pub unit: String,
    /// The unit fell back to [`UNKNOWN_UNIT`].
    pub unit_missing: bool,
}

/// Composes a measurement value with its unit.
///
/// The unit comes from `unit`, else `default_unit`, else [`UNKNOWN_UNIT`].
/// A value that already ends with its unit is not extended again.
pub fn compose_measurement(
    value: &str,
    unit: Option<&str>,
    default_unit: Option<&str>,
) -> Measurement {
    let value = value.trim();
    let explicit = unit
        .or(default_unit)
        .map(str::trim)
        .filter(|unit| !unit.is_empty());
    let (unit, unit_missing) = match explicit {
        Some(unit) => (unit, false),
        None => (UNKNOWN_UNIT, true),
    };
    Measurement {
        value: append_unit(value, unit),
        unit: unit.to_string(),
        unit_missing,
    }
}

fn append_unit(value: &str, unit: &str) -> String {
    let suffix = format!(" {unit}");
    if value.ends_with(&suffix) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}
