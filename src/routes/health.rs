//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::services::catalog;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub cms: String,
}

/// Liveness probe: always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe: checks that the content store answers queries.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let cms_status = match state
        .content
        .find_objects(&catalog::restaurant_ids_query())
        .await
    {
        Ok(_) => "connected".to_string(),
        // An empty bucket still answered.
        Err(e) if e.is_not_found() => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "CMS health check failed");
            format!("error: {e}")
        }
    };

    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        cms: cms_status,
    })
}
