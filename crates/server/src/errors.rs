use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

const INTERNAL_DETAIL: &str = "Internal Server Error";

/// Error returned by handlers; rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self.0 {
            ServiceError::NotFound(msg) | ServiceError::Validation(msg) => msg,
            ServiceError::Db(msg) => {
                // full driver error stays in the log only
                error!(error = %msg, "database error");
                INTERNAL_DETAIL.to_string()
            }
        };
        (status, Json(serde_json::json!({"detail": detail}))).into_response()
    }
}
