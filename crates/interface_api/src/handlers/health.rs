//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use domain_rating::{HealthCheckResult, HealthCheckable};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub rate_store: HealthCheckResult,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes the rating reference-data store)
///
/// Probes the store through the port's health check, so readiness follows
/// whatever adapter the router was built with.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    let rate_store = state.rates.health_check().await;

    if !rate_store.is_healthy() {
        tracing::warn!(
            adapter = %rate_store.adapter_id,
            message = ?rate_store.message,
            "Readiness check failed"
        );
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rate_store,
    }))
}
