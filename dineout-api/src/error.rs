use axum::{http::StatusCode, response::Json};
use tracing::error;

use crate::models::ApiErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match &self {
            ApiError::Store(e) => {
                error!("store query failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ApiErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
