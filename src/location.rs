use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::session::{SharedSession, ViewerPosition};

/// Central Sydney, used whenever the viewer's position cannot be resolved.
pub const FALLBACK_POSITION: ViewerPosition = ViewerPosition {
    latitude: -33.8688,
    longitude: 151.2093,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    Denied,
    #[error("location request timed out")]
    Timeout,
    #[error("no location source available")]
    Unavailable,
}

/// Single-shot source for the viewer's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn resolve(&self) -> Result<ViewerPosition, LocationError>;
}

/// Position supplied through configuration, standing in for a device
/// geolocation source. Reports `Unavailable` when none was supplied.
pub struct ConfiguredLocation {
    position: Option<ViewerPosition>,
}

impl ConfiguredLocation {
    pub fn new(position: Option<ViewerPosition>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    async fn resolve(&self) -> Result<ViewerPosition, LocationError> {
        self.position.ok_or(LocationError::Unavailable)
    }
}

/// Resolves the viewer position once and commits it to the session.
///
/// Resolution failures are absorbed here by committing the Sydney fallback;
/// they never reach the display. The commit itself is first-write-wins, so
/// a duplicate resolution cannot move an already-set position.
pub async fn resolve_viewer<P: LocationProvider>(provider: &P, session: &SharedSession) {
    let position = match provider.resolve().await {
        Ok(position) => position,
        Err(e) => {
            warn!(error = %e, "falling back to default viewer position");
            FALLBACK_POSITION
        }
    };

    if session.write().await.commit_viewer(position) {
        info!(
            latitude = position.latitude,
            longitude = position.longitude,
            "viewer position set"
        );
    }
}
