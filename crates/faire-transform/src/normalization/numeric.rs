//! Numeric normalization: plain numbers, integers and coordinates.

use faire_model::format_number;

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Renders an integral value without a fractional part (`2.0` → `2`).
///
/// Returns `None` when the value is not a whole number.
pub fn normalize_integer(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(integer.to_string());
    }
    let number = parse_f64(trimmed)?;
    (number.fract() == 0.0).then(|| format_number(number))
}

/// Decimal-degree axis, bounding the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

/// Validates a decimal-degree coordinate.
///
/// Returns the number without trailing zeros, or `None` when the value is
/// not a number or lies outside the axis range.
pub fn normalize_coordinate(value: &str, axis: Axis) -> Option<String> {
    let number = parse_f64(value)?;
    (number.abs() <= axis.limit()).then(|| format_number(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(normalize_integer("2").as_deref(), Some("2"));
        assert_eq!(normalize_integer("2.0").as_deref(), Some("2"));
        assert_eq!(normalize_integer(" -3 ").as_deref(), Some("-3"));
        assert_eq!(normalize_integer("2.5"), None);
        assert_eq!(normalize_integer("two"), None);
        assert_eq!(normalize_integer(""), None);
    }

    #[test]
    fn coordinates() {
        assert_eq!(
            normalize_coordinate("-17.50", Axis::Latitude).as_deref(),
            Some("-17.5")
        );
        assert_eq!(
            normalize_coordinate("119.3", Axis::Longitude).as_deref(),
            Some("119.3")
        );
        assert_eq!(normalize_coordinate("91", Axis::Latitude), None);
        assert_eq!(
            normalize_coordinate("179.9", Axis::Longitude).as_deref(),
            Some("179.9")
        );
        assert_eq!(normalize_coordinate("181", Axis::Longitude), None);
        assert_eq!(normalize_coordinate("17 S", Axis::Latitude), None);
        assert_eq!(normalize_coordinate("NaN", Axis::Latitude), None);
    }
}
