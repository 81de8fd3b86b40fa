//! Coercion of loosely-typed JSON request fields to numbers.
//!
//! Web clients send numbers both as JSON numbers and as strings taken
//! straight from form inputs. Both are accepted; everything else is rejected.

use serde_json::{Map, Value};

use crate::error::{Result, WaypointError};

/// Coerce a JSON value to a finite `f64`.
pub fn number(value: &Value, field: &str) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| WaypointError::invalid(field, "number out of range"))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| WaypointError::invalid(field, format!("'{s}' is not a number")))?,
        Value::Null => return Err(WaypointError::invalid(field, "value is null")),
        other => {
            return Err(WaypointError::invalid(
                field,
                format!("expected a number, got {}", type_name(other)),
            ))
        }
    };

    if !parsed.is_finite() {
        return Err(WaypointError::invalid(field, "value must be finite"));
    }
    Ok(parsed)
}

/// Look up and coerce a field that must be present.
pub fn required(obj: &Map<String, Value>, field: &str) -> Result<f64> {
    let value = obj
        .get(field)
        .ok_or_else(|| WaypointError::invalid(field, "field is required"))?;
    number(value, field)
}

/// Look up and coerce a field, falling back to `default` when absent.
pub fn optional(obj: &Map<String, Value>, field: &str, default: f64) -> Result<f64> {
    match obj.get(field) {
        Some(value) => number(value, field),
        None => Ok(default),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
