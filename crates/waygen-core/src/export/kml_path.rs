//! Path visualization as a single KML LineString.

use std::collections::HashMap;
use std::io::Write;

use kml::types::{AltitudeMode, Coord, Element, Geometry, LineString, Placemark};
use kml::{Kml, KmlDocument, KmlVersion, KmlWriter};

use crate::error::Result;
use crate::models::{GeoPoint, Waypoint, HOME_ALTITUDE_M};

/// Line color in KML `aabbggrr` order.
pub const LINE_COLOR: &str = "ff3b82f6";
/// Line width in pixels.
pub const LINE_WIDTH: u32 = 3;

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

fn text_element(name: &str, content: impl Into<String>) -> Element {
    Element {
        name: name.to_string(),
        content: Some(content.into()),
        ..Default::default()
    }
}

/// Inline `<Style><LineStyle>` carrying only color and width.
fn line_style() -> Element {
    let line = Element {
        name: "LineStyle".to_string(),
        children: vec![
            text_element("color", LINE_COLOR),
            text_element("width", LINE_WIDTH.to_string()),
        ],
        ..Default::default()
    };
    Element {
        name: "Style".to_string(),
        children: vec![line],
        ..Default::default()
    }
}

/// Home point first, then each waypoint. Coordinates are lon,lat,alt.
fn path_coords(origin: GeoPoint, waypoints: &[Waypoint]) -> Vec<Coord> {
    std::iter::once(Coord::new(origin.lon, origin.lat, Some(HOME_ALTITUDE_M)))
        .chain(
            waypoints
                .iter()
                .map(|wp| Coord::new(wp.longitude, wp.latitude, Some(wp.altitude))),
        )
        .collect()
}

fn path_document(origin: GeoPoint, waypoints: &[Waypoint]) -> Kml {
    let line = LineString {
        coords: path_coords(origin, waypoints),
        tessellate: true,
        altitude_mode: AltitudeMode::Absolute,
        ..Default::default()
    };
    let placemark = Placemark {
        name: Some("Flight Path".to_string()),
        geometry: Some(Geometry::LineString(line)),
        children: vec![line_style()],
        ..Default::default()
    };
    let document = Kml::Document {
        attrs: HashMap::new(),
        elements: vec![
            Kml::Element(text_element("name", "Waypoint Path")),
            Kml::Placemark(placemark),
        ],
    };

    Kml::KmlDocument(KmlDocument {
        version: KmlVersion::V22,
        attrs: [("xmlns".to_string(), KML_NAMESPACE.to_string())].into(),
        elements: vec![document],
    })
}

/// Write the path document to `writer`.
pub fn write_kml<W: Write>(mut writer: W, origin: GeoPoint, waypoints: &[Waypoint]) -> Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    KmlWriter::<_, f64>::from_writer(&mut writer).write(&path_document(origin, waypoints))?;
    writer.flush()?;
    Ok(())
}

/// Render the path document into memory.
pub fn export_kml(origin: GeoPoint, waypoints: &[Waypoint]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_kml(&mut buf, origin, waypoints)?;
    tracing::debug!(points = waypoints.len() + 1, bytes = buf.len(), "exported kml");
    Ok(buf)
}
