//! Coercion of raw string fields into numeric entity values.

use crate::error::{ModelError, ModelResult};

/// Parse the raw `diameter` column.
///
/// An empty field means "unknown" and maps to NaN. Anything else must be a
/// finite, non-negative number of kilometers.
pub fn parse_diameter(raw: &str) -> ModelResult<f64> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    let value = parse_number("diameter", raw)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::OutOfRange {
            field: "diameter",
            value,
        });
    }
    Ok(value)
}

/// Parse a required measurement such as `dist` or `v_rel`.
pub fn parse_measure(field: &'static str, raw: &str) -> ModelResult<f64> {
    check_measure(field, parse_number(field, raw)?)
}

/// Accept an already-numeric measurement, rejecting NaN and infinities.
pub fn check_measure(field: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange { field, value })
    }
}

fn parse_number(field: &'static str, raw: &str) -> ModelResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ModelError::invalid_number(field, raw))
}
