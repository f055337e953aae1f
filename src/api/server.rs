use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::session::{SharedSession, ViewerPosition};
use crate::view::{self, AnnotatedVehicle};

/// What the map display reads: the annotated vehicles, the viewer position
/// (if resolved), and the current poll error (if any).
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub vehicles: Vec<AnnotatedVehicle>,
    pub viewer: Option<ViewerPosition>,
    pub error: Option<String>,
}

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/api/vehicles", get(vehicle_view))
        .route("/health", get(health_check))
        .with_state(session)
}

pub async fn run_server(session: SharedSession, port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    info!(%addr, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(session)).await
}

/// The view is rebuilt from session state on every request.
async fn vehicle_view(State(session): State<SharedSession>) -> Json<ViewResponse> {
    let state = session.read().await;

    Json(ViewResponse {
        vehicles: view::build_view(state.snapshot(), state.viewer()),
        viewer: state.viewer(),
        error: state.last_error().map(str::to_owned),
    })
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
