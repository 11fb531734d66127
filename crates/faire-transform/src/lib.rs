//! FAIRe value normalization.
//!
//! - **normalization**: the individual rules (dates, regions, units, numbers)
//! - **field**: applies a dictionary field's rule to a row

pub mod field;
pub mod normalization;

pub use field::{Normalized, normalize_field, source_value};
