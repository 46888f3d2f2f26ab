use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            ApiError::Validation(message) => {
                tracing::debug!("Request validation failed: {}", message);
                message
            }
            ApiError::InvalidBody { message, .. } => {
                tracing::debug!("Rejected request body ({}): {}", status, message);
                message
            }
        };

        // FastAPI 互換の `{"detail": ...}` 形式
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// Json extractor rejection mapping
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QUESTION_REQUIRED;

    async fn response_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        (status, serde_json::from_slice(&bytes).expect("Body is not JSON"))
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let (status, body) = response_parts(ApiError::validation(QUESTION_REQUIRED)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "'question' field is required." }));
    }

    #[tokio::test]
    async fn test_invalid_body_keeps_rejection_status() {
        let error = ApiError::InvalidBody {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };
        let (status, body) = response_parts(error).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["detail"], "Expected request with `Content-Type: application/json`");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::validation("bad").to_string(),
            "Validation error: bad"
        );
        let body_error = ApiError::InvalidBody {
            status: StatusCode::BAD_REQUEST,
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(body_error.to_string(), "Invalid request body: EOF while parsing");
    }
}
