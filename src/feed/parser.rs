use crate::feed::types::{FeedMessage, VehicleObservation};

/// Projects a decoded feed into vehicle observations.
///
/// An entity is kept only when it carries a vehicle position and a trip
/// with a route id; everything else is dropped without raising an error.
/// Input order is preserved.
pub fn parse_feed(feed: FeedMessage) -> Vec<VehicleObservation> {
    feed.entity
        .into_iter()
        .filter_map(|entity| {
            let vehicle = entity.vehicle?;
            let position = vehicle.position?;
            let route_id = vehicle
                .trip
                .and_then(|trip| trip.route_id)
                .filter(|route_id| !route_id.is_empty())?;

            Some(VehicleObservation {
                id: entity.id,
                latitude: position.latitude,
                longitude: position.longitude,
                route_id,
            })
        })
        .collect()
}
