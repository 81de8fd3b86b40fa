pub mod coerce;
pub mod error;
pub mod export;
pub mod models;
pub mod path;
pub mod spatial;

pub use error::{Result, WaypointError};
pub use export::{export, export_csv, export_kml, ExportFormat};
pub use models::{GeoPoint, LegDefaults, LegSpec, MissionParams, Waypoint};
pub use path::{accumulate, generate_waypoints, path_length_m};
pub use spatial::{haversine_distance, normalize_bearing, project};
