use serde::Serialize;

use crate::color::color_for_route;
use crate::feed::VehicleObservation;
use crate::geo::haversine_distance_km;
use crate::session::ViewerPosition;

pub const NEARBY_THRESHOLD_KM: f64 = 5.0;

/// A vehicle observation annotated for display: distance from the viewer,
/// route color, and the proximity flag.
///
/// `distance_km` is `f64::INFINITY` while the viewer position is still
/// unresolved; serde_json renders non-finite floats as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedVehicle {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub route_id: String,
    pub distance_km: f64,
    pub color: String,
    pub is_nearby: bool,
}

/// Derives the render-ready view from a snapshot. Order follows the
/// snapshot; nothing is stored, the view is rebuilt on every read.
pub fn build_view(
    snapshot: &[VehicleObservation],
    viewer: Option<ViewerPosition>,
) -> Vec<AnnotatedVehicle> {
    snapshot
        .iter()
        .map(|bus| {
            let distance_km = match viewer {
                Some(viewer) => {
                    haversine_distance_km(viewer.latitude, viewer.longitude, bus.latitude, bus.longitude)
                }
                None => f64::INFINITY,
            };

            AnnotatedVehicle {
                id: bus.id.clone(),
                latitude: bus.latitude,
                longitude: bus.longitude,
                route_id: bus.route_id.clone(),
                distance_km,
                color: color_for_route(&bus.route_id),
                is_nearby: distance_km <= NEARBY_THRESHOLD_KM,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(id: &str, latitude: f64, longitude: f64, route_id: &str) -> VehicleObservation {
        VehicleObservation {
            id: id.to_string(),
            latitude,
            longitude,
            route_id: route_id.to_string(),
        }
    }

    #[test]
    fn annotates_nearby_vehicle_with_distance_and_color() {
        let snapshot = vec![observation("1", -33.87, 151.21, "M20")];
        let viewer = ViewerPosition { latitude: -33.8688, longitude: 151.2093 };

        let view = build_view(&snapshot, Some(viewer));

        assert_eq!(view.len(), 1);
        let vehicle = &view[0];
        assert!(
            (vehicle.distance_km - 0.1483).abs() < 0.001,
            "expected ~0.1483 km, got {}",
            vehicle.distance_km
        );
        assert!(vehicle.is_nearby);
        assert_eq!(vehicle.color, "hsl(355, 100%, 50%)");
        assert_eq!(vehicle.route_id, "M20");
    }

    #[test]
    fn missing_viewer_yields_infinite_distance_and_not_nearby() {
        let snapshot = vec![observation("1", -33.87, 151.21, "M20")];

        let view = build_view(&snapshot, None);

        assert_eq!(view[0].distance_km, f64::INFINITY);
        assert!(!view[0].is_nearby);
    }

    #[test]
    fn five_kilometer_threshold() {
        // At the equator 0.0449 degrees of longitude is just under 5 km,
        // 0.05 degrees is well over.
        let snapshot = vec![
            observation("near", 0.0, 0.0449, "A"),
            observation("far", 0.0, 0.05, "A"),
        ];
        let viewer = ViewerPosition { latitude: 0.0, longitude: 0.0 };

        let view = build_view(&snapshot, Some(viewer));

        assert!(view[0].is_nearby);
        assert!(!view[1].is_nearby);
    }

    #[test]
    fn view_preserves_snapshot_order() {
        let snapshot = vec![
            observation("3", -33.0, 151.0, "A"),
            observation("1", -33.1, 151.1, "B"),
            observation("2", -33.2, 151.2, "C"),
        ];

        let view = build_view(&snapshot, None);

        let ids: Vec<&str> = view.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
