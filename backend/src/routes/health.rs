use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{AppState, START_TIME, VERSION};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub environment: String,
    pub timestamp: String,
}

/// Basic health check handler
pub async fn handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime_seconds = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: VERSION.to_string(),
            uptime_seconds,
            environment: state.config.environment.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
