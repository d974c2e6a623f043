//! Health check handlers and response types.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns "healthy", "timeout", or "unhealthy: {error}".
async fn run_check<F, E>(f: F) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(CHECK_TIMEOUT, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("unhealthy: {}", e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub ledger: String,
    pub storage: String,
}

/// Liveness probe - process is running.
pub(super) async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Full health check (ledger readable, storage directories usable).
pub(super) async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ledger = state.ledger.clone();
    let ledger_status = run_check(async move { ledger.load().await.map(drop) }).await;

    let storage = state.storage.clone();
    let storage_status = run_check(async move { storage.health_check().await }).await;

    let healthy = ledger_status == "healthy" && storage_status == "healthy";
    if !healthy {
        tracing::warn!(
            ledger = %ledger_status,
            storage = %storage_status,
            "Health check failed"
        );
    }

    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        ledger: ledger_status,
        storage: storage_status,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
