pub mod parser;
pub mod types;

pub use parser::parse_feed;
pub use types::{
    FeedEntity, FeedMessage, Position, TripDescriptor, VehicleDescriptor, VehicleObservation,
};
