//! Autopilot waypoint table (Litchi mission CSV).
//!
//! One synthetic home row followed by one row per waypoint. Column names and
//! order are fixed by the importer on the autopilot side.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::{GeoPoint, MissionParams, Waypoint, HOME_ALTITUDE_M};

/// Header line, in column order.
pub const CSV_COLUMNS: [&str; 18] = [
    "latitude",
    "longitude",
    "altitude(m)",
    "heading(deg)",
    "curvesize(m)",
    "rotationdir",
    "gimbalmode",
    "gimbalpitchangle",
    "actiontype1",
    "actionparam1",
    "altitudemode",
    "speed(m/s)",
    "poi_latitude",
    "poi_longitude",
    "poi_altitude(m)",
    "poi_altitudemode",
    "photo_timeinterval",
    "photo_distinterval",
];

/// A single table row. Field order is the column order.
#[derive(Debug, Clone, Serialize)]
struct MissionRow {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "altitude(m)")]
    altitude: f64,
    #[serde(rename = "heading(deg)")]
    heading: f64,
    #[serde(rename = "curvesize(m)")]
    curvesize: f64,
    rotationdir: u8,
    gimbalmode: u8,
    gimbalpitchangle: f64,
    actiontype1: u8,
    actionparam1: i64,
    altitudemode: u8,
    #[serde(rename = "speed(m/s)")]
    speed: f64,
    poi_latitude: f64,
    poi_longitude: f64,
    #[serde(rename = "poi_altitude(m)")]
    poi_altitude: f64,
    poi_altitudemode: u8,
    photo_timeinterval: f64,
    photo_distinterval: u8,
}

impl MissionRow {
    /// Row with mission-wide columns filled in and the per-point columns at the home point.
    fn base(origin: GeoPoint, params: &MissionParams) -> Self {
        Self {
            latitude: origin.lat,
            longitude: origin.lon,
            altitude: HOME_ALTITUDE_M,
            heading: params.initial_heading,
            curvesize: params.curve,
            rotationdir: 0,
            gimbalmode: 0,
            gimbalpitchangle: params.pitch,
            actiontype1: 0,
            actionparam1: 0,
            altitudemode: 0,
            speed: params.speed,
            poi_latitude: origin.lat,
            poi_longitude: origin.lon,
            poi_altitude: params.poi_altitude,
            poi_altitudemode: 0,
            photo_timeinterval: params.photo_interval,
            photo_distinterval: 0,
        }
    }

    fn waypoint(origin: GeoPoint, params: &MissionParams, wp: &Waypoint) -> Self {
        Self {
            latitude: wp.latitude,
            longitude: wp.longitude,
            altitude: wp.altitude,
            heading: wp.true_bearing,
            actionparam1: hold_millis(wp.hold_time),
            ..Self::base(origin, params)
        }
    }
}

/// Hold time in whole milliseconds, as the autopilot reads `actionparam1`.
pub fn hold_millis(hold_time_s: f64) -> i64 {
    (hold_time_s * 1000.0).round() as i64
}

/// Write the mission table to `writer`.
pub fn write_csv<W: Write>(
    writer: W,
    origin: GeoPoint,
    waypoints: &[Waypoint],
    params: &MissionParams,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    wtr.serialize(MissionRow::base(origin, params))?;
    for wp in waypoints {
        wtr.serialize(MissionRow::waypoint(origin, params, wp))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the mission table into memory.
pub fn export_csv(
    origin: GeoPoint,
    waypoints: &[Waypoint],
    params: &MissionParams,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(&mut buf, origin, waypoints, params)?;
    tracing::debug!(rows = waypoints.len() + 1, bytes = buf.len(), "exported csv");
    Ok(buf)
}
