//! Parsing of the mission request body.
//!
//! Fields arrive loosely typed (numbers or numeric strings); everything is
//! coerced here so the core only sees validated values.

use serde_json::{Map, Value};
use waygen_core::coerce;
use waygen_core::{normalize_bearing, ExportFormat, GeoPoint, MissionParams, WaypointError};

/// A validated mission request.
#[derive(Debug, Clone)]
pub struct MissionRequest {
    pub origin: GeoPoint,
    pub initial_bearing: f64,
    pub format: ExportFormat,
    /// Raw legs, coerced by the core during accumulation
    pub legs: Vec<Value>,
    pub mission: MissionParams,
}

impl MissionRequest {
    pub fn from_json(body: &Value, max_legs: usize) -> Result<Self, WaypointError> {
        let Some(obj) = body.as_object() else {
            return Err(WaypointError::invalid("body", "request body must be a JSON object"));
        };

        let origin = GeoPoint::new(
            coerce::required(obj, "init_lat")?,
            coerce::required(obj, "init_lon")?,
        );
        let initial_bearing = coerce::required(obj, "init_bearing")?;
        let format = parse_format(obj);
        let legs = parse_legs(obj, max_legs)?;

        let defaults = MissionParams::default();
        let mission = MissionParams {
            poi_altitude: coerce::optional(obj, "poi_altitude", defaults.poi_altitude)?,
            speed: coerce::optional(obj, "speed_start", defaults.speed)?,
            curve: coerce::optional(obj, "curve_size", defaults.curve)?,
            pitch: coerce::optional(obj, "gimbal_pitch", defaults.pitch)?,
            photo_interval: coerce::optional(obj, "photo_interval", defaults.photo_interval)?,
            initial_heading: normalize_bearing(initial_bearing),
        };

        Ok(Self {
            origin,
            initial_bearing,
            format,
            legs,
            mission,
        })
    }
}

/// Only the exact string `"kml"` selects KML; anything else, including a
/// missing or non-string value, falls back to CSV.
fn parse_format(obj: &Map<String, Value>) -> ExportFormat {
    match obj.get("format") {
        Some(Value::String(name)) => ExportFormat::from_name(name),
        _ => ExportFormat::default(),
    }
}

fn parse_legs(obj: &Map<String, Value>, max_legs: usize) -> Result<Vec<Value>, WaypointError> {
    let legs = match obj.get("waypoints") {
        Some(Value::Array(legs)) => legs,
        Some(_) => {
            return Err(WaypointError::invalid(
                "waypoints",
                "waypoints must be an array",
            ))
        }
        None => return Err(WaypointError::invalid("waypoints", "field is required")),
    };
    if legs.len() > max_legs {
        return Err(WaypointError::invalid(
            "waypoints",
            format!("{} legs exceeds the limit of {}", legs.len(), max_legs),
        ));
    }
    Ok(legs.clone())
}
