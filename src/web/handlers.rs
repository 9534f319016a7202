//! HTTP handlers for the API endpoints.

use crate::libre::TempResolver;
use crate::metrics::{MetricsCollector, MetricsSnapshot};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handler state, constructed once at startup and injected through
/// the router rather than living in a module-level global.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<Mutex<MetricsCollector>>,
    pub resolver: Arc<TempResolver>,
    pub port: u16,
}

/// `GET /api/metrics`: full live snapshot.
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let mut collector = state.collector.lock().await;
    Json(collector.collect().await)
}

/// `GET /api/port`: the port this server is configured to listen on.
pub async fn get_port(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "port": state.port }))
}

/// `GET /api/libre-debug`: remote hardware-monitor connectivity check.
pub async fn libre_debug(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let status = state.resolver.status().await;

    if status.connected {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "cpu_temp": status.cpu_temp,
                "disk_temp": status.disk_temp,
                "libre_hw_connected": true,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "message": "Cannot connect to LibreHardwareMonitor",
                "url": state.resolver.url(),
                "libre_hw_connected": false,
            })),
        )
    }
}
