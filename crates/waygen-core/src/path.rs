//! Path accumulation: chaining relative legs into absolute waypoints.

use serde_json::Value;

use crate::error::Result;
use crate::models::{GeoPoint, LegDefaults, LegSpec, Waypoint, MIN_WAYPOINT_ALTITUDE_M};
use crate::spatial::{haversine_distance, normalize_bearing, project};

/// Walk `legs` in order from `origin`, projecting each leg from the end of the previous one.
///
/// Every leg's bearing is relative to `initial_bearing`, not to the previous
/// leg. Output has exactly one waypoint per leg, in input order.
pub fn accumulate(origin: GeoPoint, initial_bearing: f64, legs: &[LegSpec]) -> Vec<Waypoint> {
    let mut current = origin;
    let mut waypoints = Vec::with_capacity(legs.len());

    for leg in legs {
        let bearing = normalize_bearing(initial_bearing + leg.bearing);
        let destination = project(current, bearing, leg.horizontal);

        waypoints.push(Waypoint {
            latitude: destination.lat,
            longitude: destination.lon,
            altitude: leg.vertical.max(MIN_WAYPOINT_ALTITUDE_M),
            true_bearing: bearing,
            hold_time: leg.hold_time,
        });
        current = destination;
    }

    tracing::debug!(
        legs = legs.len(),
        origin_lat = origin.lat,
        origin_lon = origin.lon,
        "accumulated path"
    );
    waypoints
}

/// Coerce raw JSON legs and accumulate them.
///
/// Fails on the first leg that cannot be coerced; no partial path is returned.
pub fn generate_waypoints(
    origin_lat: f64,
    origin_lon: f64,
    initial_bearing: f64,
    legs: &[Value],
) -> Result<Vec<Waypoint>> {
    let defaults = LegDefaults::default();
    let specs = legs
        .iter()
        .enumerate()
        .map(|(idx, leg)| LegSpec::from_json(leg, idx, &defaults))
        .collect::<Result<Vec<_>>>()?;

    Ok(accumulate(
        GeoPoint::new(origin_lat, origin_lon),
        initial_bearing,
        &specs,
    ))
}

/// Total horizontal length of the path starting at `origin`, in meters.
pub fn path_length_m(origin: GeoPoint, waypoints: &[Waypoint]) -> f64 {
    let mut previous = origin;
    let mut total = 0.0;
    for wp in waypoints {
        let next = wp.position();
        total += haversine_distance(previous, next);
        previous = next;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaypointError;
    use serde_json::json;

    fn leg(horizontal: f64, bearing: f64, vertical: f64, hold_time: f64) -> LegSpec {
        LegSpec {
            horizontal,
            vertical,
            bearing,
            hold_time,
        }
    }

    #[test]
    fn single_leg_east_of_null_island() {
        let wps = accumulate(GeoPoint::new(0.0, 0.0), 0.0, &[leg(1000.0, 90.0, 50.0, 2.0)]);
        assert_eq!(wps.len(), 1);
        let wp = wps[0];
        assert_eq!(wp.true_bearing, 90.0);
        assert_eq!(wp.altitude, 50.0);
        assert_eq!(wp.hold_time, 2.0);
        assert!(wp.latitude.abs() < 1e-9);
        assert!((wp.longitude - 0.00899).abs() < 1e-4);
    }

    #[test]
    fn altitude_is_floored() {
        let wps = accumulate(
            GeoPoint::new(10.0, 10.0),
            0.0,
            &[leg(5.0, 0.0, 0.0, 0.0), leg(5.0, 0.0, -30.0, 0.0), leg(5.0, 0.0, 1.99, 0.0)],
        );
        assert!(wps.iter().all(|wp| wp.altitude == 2.0));
    }

    #[test]
    fn bearings_are_normalized() {
        let legs: Vec<LegSpec> = [-720.5, -90.0, 0.0, 359.9, 360.0, 1000.0]
            .into_iter()
            .map(|b| leg(10.0, b, 10.0, 0.0))
            .collect();
        for initial in [-45.0, 0.0, 270.0, 3600.0] {
            for wp in accumulate(GeoPoint::new(1.0, 2.0), initial, &legs) {
                assert!((0.0..360.0).contains(&wp.true_bearing), "{}", wp.true_bearing);
            }
        }
    }

    #[test]
    fn legs_chain_from_previous_destination() {
        let origin = GeoPoint::new(45.0, 7.0);
        let wps = accumulate(
            origin,
            30.0,
            &[leg(200.0, 0.0, 10.0, 0.0), leg(300.0, 90.0, 20.0, 0.0)],
        );
        let first = project(origin, 30.0, 200.0);
        let second = project(first, 120.0, 300.0);
        assert_eq!(wps[0].position(), first);
        assert_eq!(wps[1].position(), second);
    }

    #[test]
    fn zero_length_leg_stays_in_place() {
        let origin = GeoPoint::new(-33.9, 151.2);
        let wps = accumulate(origin, 0.0, &[leg(0.0, 45.0, 10.0, 5.0)]);
        assert!((wps[0].latitude - origin.lat).abs() < 1e-12);
        assert!((wps[0].longitude - origin.lon).abs() < 1e-12);
    }

    #[test]
    fn accumulation_is_deterministic() {
        let legs = [leg(120.0, 15.0, 30.0, 1.0), leg(80.0, -60.0, 40.0, 0.5)];
        let a = accumulate(GeoPoint::new(51.5, -0.12), 200.0, &legs);
        let b = accumulate(GeoPoint::new(51.5, -0.12), 200.0, &legs);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_legs_give_empty_path() {
        assert!(accumulate(GeoPoint::new(0.0, 0.0), 0.0, &[]).is_empty());
    }

    #[test]
    fn generate_waypoints_preserves_order_and_count() {
        let legs = vec![
            json!({ "horizontal": 10, "vertical": 20 }),
            json!({ "horizontal": "20", "bearing": 90 }),
            json!({}),
        ];
        let wps = generate_waypoints(33.0, -117.0, 0.0, &legs).unwrap();
        assert_eq!(wps.len(), 3);
        assert_eq!(wps[0].altitude, 20.0);
        assert_eq!(wps[1].true_bearing, 90.0);
        assert_eq!(wps[2].altitude, 2.0);
        assert!((wps[2].latitude - wps[1].latitude).abs() < 1e-12);
        assert!((wps[2].longitude - wps[1].longitude).abs() < 1e-12);
    }

    #[test]
    fn generate_waypoints_rejects_bad_leg() {
        let legs = vec![json!({ "horizontal": 10 }), json!({ "hold_time": "soon" })];
        let err = generate_waypoints(0.0, 0.0, 0.0, &legs).unwrap_err();
        assert!(matches!(err, WaypointError::InvalidInput { .. }));
        assert_eq!(err.field(), Some("waypoints[1].hold_time"));
    }

    #[test]
    fn path_length_sums_legs() {
        let origin = GeoPoint::new(0.0, 0.0);
        let wps = accumulate(origin, 0.0, &[leg(100.0, 0.0, 5.0, 0.0), leg(250.0, 90.0, 5.0, 0.0)]);
        let total = path_length_m(origin, &wps);
        assert!((total - 350.0).abs() < 1e-3, "got {total}");
    }
}
