use serde::{Deserialize, Serialize};

/// Wire shape of the realtime bus feed: `{ "entity": [...] }`.
///
/// Field names on the wire are camelCase. Everything beyond what the view
/// needs is ignored, and a body without an `entity` array decodes as an
/// empty feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedMessage {
    #[serde(default)]
    pub entity: Vec<FeedEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntity {
    pub id: String,
    pub vehicle: Option<VehicleDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleDescriptor {
    pub position: Option<Position>,
    pub trip: Option<TripDescriptor>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripDescriptor {
    #[serde(rename = "routeId")]
    pub route_id: Option<String>,
}

/// One vehicle from the most recent successful poll.
///
/// Rebuilt fresh on every poll; snapshots replace, never merge. `id` is
/// expected to be unique within a snapshot (the display keys markers by it).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleObservation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub route_id: String,
}
