//! Value normalization rules.
//!
//! - **datetime**: collection date validation
//! - **geo**: geographic region truncation
//! - **units**: measurement and unit composition
//! - **numeric**: integers and decimal-degree coordinates
//! - **qualified**: parenthesised qualifiers

pub mod datetime;
pub mod geo;
pub mod numeric;
pub mod qualified;
pub mod units;

pub use datetime::{
    DateCheck, MISSING_VALUE_TERMS, NOT_PROVIDED, check_date, is_missing_value,
    missing_value_term, normalize_date,
};
pub use geo::truncate_region;
pub use numeric::{Axis, normalize_coordinate, normalize_integer, parse_f64};
pub use qualified::qualify;
pub use units::{Measurement, UNKNOWN_UNIT, compose_measurement};
