use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness probe; no dependencies are touched.
pub async fn health() -> Json<HealthResponseData> {
    Json(HealthResponseData {
        status: "healthy",
        service: "account-service",
    })
}
