//! Serialization of an accumulated path into downstream formats.

pub mod kml_path;
pub mod litchi;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{GeoPoint, MissionParams, Waypoint};

pub use kml_path::{export_kml, write_kml};
pub use litchi::{export_csv, write_csv, CSV_COLUMNS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Litchi waypoint table
    #[default]
    Csv,
    /// Google Earth path
    Kml,
}

impl ExportFormat {
    /// Only the exact name `kml` selects KML; any other value means CSV.
    pub fn from_name(value: &str) -> Self {
        if value == "kml" {
            Self::Kml
        } else {
            Self::Csv
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Kml => "application/vnd.google-earth.kml+xml",
        }
    }

    pub fn download_name(&self) -> &'static str {
        match self {
            Self::Csv => "litchi_waypoints.csv",
            Self::Kml => "litchi_path.kml",
        }
    }
}

/// Export in the requested format. KML ignores `params`.
pub fn export(
    format: ExportFormat,
    origin: GeoPoint,
    waypoints: &[Waypoint],
    params: &MissionParams,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => export_csv(origin, waypoints, params),
        ExportFormat::Kml => export_kml(origin, waypoints),
    }
}
