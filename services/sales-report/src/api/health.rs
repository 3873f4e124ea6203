//! 健康检查与指标

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use salesdesk_telemetry::HealthStatus;
use serde::Serialize;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub(super) async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /ready：数据库不可达时返回 503
pub(super) async fn readiness_check(State(state): State<AppState>) -> Response {
    let mut status = HealthStatus::new();

    match state.probe.ping().await {
        Ok(()) => status.add_check("postgres", true, None),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            status.add_check("postgres", false, Some("unreachable".to_string()));
        }
    }

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status)).into_response()
}

/// GET /metrics
pub(super) async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
