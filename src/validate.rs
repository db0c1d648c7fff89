//! Runtime checks for chart settings.
//!
//! Settings arrive as [`serde_json::Value`] so that the same checks cover
//! literals in code, CLI flags and values read from a settings file. A value is
//! accepted only when its JSON type is exactly the one asked for: numbers are
//! never read as strings and `0`/`1` are never read as booleans.

use crate::error::{Expected, ValidationError};
use crate::models::Mode;
use serde_json::Value;

/// Accept `value` only if it is a JSON string.
pub fn validate_string<'a>(value: &'a Value, name: &str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::new(name, Expected::Str))
}

/// Accept `value` only if it is a JSON boolean.
pub fn validate_boolean(value: &Value, name: &str) -> Result<bool, ValidationError> {
    value
        .as_bool()
        .ok_or_else(|| ValidationError::new(name, Expected::Bool))
}

/// Accept `value` only if it is exactly `"lines"`, `"markers"` or `"lines+markers"`.
pub fn validate_mode(value: &Value) -> Result<Mode, ValidationError> {
    match value.as_str() {
        Some("lines") => Ok(Mode::Lines),
        Some("markers") => Ok(Mode::Markers),
        Some("lines+markers") => Ok(Mode::LinesMarkers),
        _ => Err(ValidationError::new("mode", Expected::Mode)),
    }
}
