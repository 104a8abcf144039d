//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the food tables are loaded)
//! - /health/live - Liveness probe (always returns OK if server is running)

use axum::{http::StatusCode, Json};
use nutrilog_shared::food_db;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub food_database: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe - checks if the service is ready to accept traffic
///
/// The food tables are compiled in, so in a normal build this always
/// reports ready; the 503 path only fires for an empty table.
pub async fn readiness_check() -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    readiness_for(food_db::food_count())
}

fn readiness_for(
    food_count: usize,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let is_healthy = food_count > 0;

    let table_check = CheckStatus {
        status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
        message: Some(format!("{} foods loaded", food_count)),
    };

    let response = HealthResponse {
        status: if is_healthy { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            food_database: table_check,
        }),
    };

    if is_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}
