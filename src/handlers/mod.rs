// Handlers module
// HTTP handlers for the REST API

pub mod questions;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{config::SERVICE_INFO, models::HealthStatus};

/// Health check handler
/// GET /
/// Always answers 200 so deployment platforms can probe the service
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::ok(SERVICE_INFO.running_message())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_payload() {
        let response = tokio_test::block_on(health_check()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX)).unwrap();
        let body: HealthStatus = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, HealthStatus::ok("TDS Virtual TA API is running!"));
    }
}
