//! Live bus position view service.
//!
//! Polls a realtime bus feed on a fixed schedule, keeps the latest snapshot
//! of vehicle observations in shared session state, and derives a
//! render-ready view (per-route color, distance from the viewer, proximity
//! flag) for an external map display.

pub mod api;
pub mod color;
pub mod feed;
pub mod geo;
pub mod location;
pub mod realtime;
pub mod session;
pub mod view;
