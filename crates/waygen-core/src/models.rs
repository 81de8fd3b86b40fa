//! Core data models for waypoint generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::error::{Result, WaypointError};

/// Minimum altitude written for any generated waypoint (meters).
pub const MIN_WAYPOINT_ALTITUDE_M: f64 = 2.0;

/// Altitude of the synthetic home point in both exports (meters).
pub const HOME_ALTITUDE_M: f64 = 5.0;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One relative leg of a mission.
///
/// Legs have no identity; a leg is always interpreted relative to the
/// position reached by the leg before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegSpec {
    /// Distance along the bearing in meters
    pub horizontal: f64,
    /// Target altitude in meters
    pub vertical: f64,
    /// Offset from the mission's initial bearing in degrees
    pub bearing: f64,
    /// Hover time at the end of the leg in seconds
    pub hold_time: f64,
}

/// Values used for leg fields the caller leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegDefaults {
    /// Default 0 m
    pub horizontal: f64,
    /// Default 2 m
    pub vertical: f64,
    /// Default 0°
    pub bearing: f64,
    /// Default 0 s
    pub hold_time: f64,
}

impl Default for LegDefaults {
    fn default() -> Self {
        Self {
            horizontal: 0.0,
            vertical: MIN_WAYPOINT_ALTITUDE_M,
            bearing: 0.0,
            hold_time: 0.0,
        }
    }
}

impl LegSpec {
    /// Build a leg from a JSON object, coercing each field to a number.
    ///
    /// `index` is the leg's position in the request and only shapes the
    /// field names reported in errors.
    pub fn from_json(value: &Value, index: usize, defaults: &LegDefaults) -> Result<Self> {
        let prefix = format!("waypoints[{index}]");
        let Some(obj) = value.as_object() else {
            return Err(WaypointError::invalid(prefix, "leg must be a JSON object"));
        };

        let field = |name: &str, default: f64| {
            coerce::optional(obj, name, default)
                .map_err(|err| prefixed(err, &prefix))
        };

        Ok(Self {
            horizontal: field("horizontal", defaults.horizontal)?,
            vertical: field("vertical", defaults.vertical)?,
            bearing: field("bearing", defaults.bearing)?,
            hold_time: field("hold_time", defaults.hold_time)?,
        })
    }
}

fn prefixed(err: WaypointError, prefix: &str) -> WaypointError {
    match err {
        WaypointError::InvalidInput { field, reason } => WaypointError::InvalidInput {
            field: format!("{prefix}.{field}"),
            reason,
        },
        other => other,
    }
}

/// An absolute waypoint produced by path accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters, never below [`MIN_WAYPOINT_ALTITUDE_M`]
    pub altitude: f64,
    /// Degrees in [0, 360)
    pub true_bearing: f64,
    /// Seconds
    pub hold_time: f64,
}

impl Waypoint {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Mission-wide values repeated on every exported waypoint row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionParams {
    /// Altitude of the point of interest in meters
    pub poi_altitude: f64,
    /// Cruise speed in m/s
    pub speed: f64,
    /// Curve size in meters
    pub curve: f64,
    /// Gimbal pitch angle in degrees
    pub pitch: f64,
    /// Seconds between photos
    pub photo_interval: f64,
    /// Heading written on the home row in degrees
    pub initial_heading: f64,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            poi_altitude: 1.0,
            speed: 0.0,
            curve: 0.0,
            pitch: 0.0,
            photo_interval: 1.0,
            initial_heading: 0.0,
        }
    }
}
