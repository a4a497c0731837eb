use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum RollcallError {
    #[error("missing fields")]
    MissingFields,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Config error: {0}")]
    ConfigError(#[from] figment::Error),
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RollcallError::MissingFields => (StatusCode::BAD_REQUEST, "missing fields".to_string()),
            RollcallError::InvalidPayload(msg) => (StatusCode::BAD_REQUEST, msg),
            RollcallError::DatabaseError(e) => {
                error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "db error".to_string())
            }
            RollcallError::ConfigError(e) => {
                error!(error = %e, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body returned by every `/api` route.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
