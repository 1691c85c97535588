//! JSON read model over the shared view state

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::state::StateHandle;
use crate::status::{ph_gauge_position, FeedBand, FeedStatus, PhStatus};

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub state: StateHandle,
}

/// Build the dashboard axum router
pub fn build_router(state: StateHandle) -> Router {
    let dashboard_state = DashboardState { state };

    Router::new()
        .route("/api/snapshot", get(snapshot_handler))
        .route("/api/notifications", get(notifications_handler))
        .route("/api/notifications/{id}/dismiss", post(dismiss_handler))
        .route("/api/status", get(status_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

/// Bind the dashboard listener on all interfaces
pub async fn bind(port: u16) -> crate::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await.map_err(|e| {
        crate::AquariumError::Dashboard(format!("failed to bind port {}: {}", port, e))
    })
}

async fn snapshot_handler(State(dashboard): State<DashboardState>) -> Response {
    let state = dashboard.state.read().await;
    match &state.snapshot {
        Some(snapshot) => Json(snapshot).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Loading aquarium data").into_response(),
    }
}

async fn notifications_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    Json(state.active_notifications())
}

async fn dismiss_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut state = dashboard.state.write().await;
    if !state.has_notification(&id) {
        return StatusCode::NOT_FOUND;
    }
    if state.dismiss(&id) {
        tracing::debug!("Dismissed notification '{}'", id);
    }
    StatusCode::NO_CONTENT
}

async fn status_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.read().await;

    let readings = state.snapshot.as_ref().map(|s| {
        serde_json::json!({
            "temperature": s.current_temperature,
            "ph": s.ph_value,
            "feed_level": s.feed_level,
            "feed_status": FeedStatus::from_level(s.feed_level),
            "feed_band": FeedBand::from_level(s.feed_level),
            "ph_status": PhStatus::from_value(s.ph_value),
            "ph_gauge_position": ph_gauge_position(s.ph_value),
        })
    });

    Json(serde_json::json!({
        "loading": state.loading,
        "refresh_count": state.refresh_count,
        "consecutive_failures": state.consecutive_failures,
        "last_error": state.last_error,
        "last_refresh_epoch_ms": state.last_refresh_epoch_ms,
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "active_notifications": state.active_notifications().len(),
        "readings": readings,
    }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
