use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Client-facing error taxonomy. Every variant renders the same JSON body:
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default mapping for the read surfaces; write surfaces override the
    /// storage-failure arm with their own policy.
    pub fn from_read(e: ServiceError) -> Self {
        match e {
            ServiceError::Invalid(_) => ApiError::BadRequest,
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Unprocessable(_) => ApiError::Unprocessable,
            ServiceError::Db(msg) => {
                error!(error = %msg, "store failure");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
