//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a `{"error": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sensor_gateway_service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing or malformed input.
    BadRequest(String),
    /// 404 Not Found: no readings for the requested sensor.
    NotFound(String),
    /// 500: database failure, message passed through as the driver reported it.
    Storage(String),
    /// 500: a server-rendered view failed to render. Details logged, not exposed.
    Render(askama::Error),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Storage(msg) => {
                tracing::error!(error = %msg, "storage error");
                msg
            },
            Self::Render(err) => {
                tracing::error!(error = ?err, "template rendering failed");
                "template rendering failed".to_owned()
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Storage(e) => Self::Storage(e.to_string()),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}
