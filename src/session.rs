use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::feed::VehicleObservation;

/// The viewer's reference position for distance calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Shared mutable view state: the latest snapshot, the latest poll error,
/// and the viewer position.
///
/// Writers are the poller's success and failure paths and the one-shot
/// viewer commit; everyone else reads through the shared lock.
#[derive(Debug, Default)]
pub struct SessionState {
    snapshot: Vec<VehicleObservation>,
    last_error: Option<String>,
    viewer: Option<ViewerPosition>,
}

pub type SharedSession = Arc<RwLock<SessionState>>;

pub fn shared() -> SharedSession {
    Arc::new(RwLock::new(SessionState::new()))
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with the result of a successful poll and
    /// clears any standing error.
    pub fn apply_snapshot(&mut self, snapshot: Vec<VehicleObservation>) {
        self.snapshot = snapshot;
        self.last_error = None;
    }

    /// Records a failed poll. The previous snapshot stays available.
    pub fn record_failure(&mut self, message: String) {
        self.last_error = Some(message);
    }

    /// Commits the viewer position. The first committed value wins; later
    /// resolutions are ignored. Returns whether the write took effect.
    pub fn commit_viewer(&mut self, position: ViewerPosition) -> bool {
        if self.viewer.is_some() {
            return false;
        }
        self.viewer = Some(position);
        true
    }

    pub fn snapshot(&self) -> &[VehicleObservation] {
        &self.snapshot
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn viewer(&self) -> Option<ViewerPosition> {
        self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(id: &str) -> VehicleObservation {
        VehicleObservation {
            id: id.to_string(),
            latitude: -33.87,
            longitude: 151.21,
            route_id: "M20".to_string(),
        }
    }

    #[test]
    fn failure_retains_previous_snapshot() {
        let mut state = SessionState::new();
        state.apply_snapshot(vec![observation("1")]);

        state.record_failure("HTTP 502".to_string());

        assert_eq!(state.snapshot().len(), 1);
        assert_eq!(state.last_error(), Some("HTTP 502"));
    }

    #[test]
    fn success_clears_standing_error() {
        let mut state = SessionState::new();
        state.record_failure("HTTP 502".to_string());

        state.apply_snapshot(vec![observation("1"), observation("2")]);

        assert_eq!(state.snapshot().len(), 2);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn first_viewer_commit_wins() {
        let mut state = SessionState::new();
        let first = ViewerPosition { latitude: -33.8688, longitude: 151.2093 };
        let second = ViewerPosition { latitude: 0.0, longitude: 0.0 };

        assert!(state.commit_viewer(first));
        assert!(!state.commit_viewer(second));
        assert_eq!(state.viewer(), Some(first));
    }
}
