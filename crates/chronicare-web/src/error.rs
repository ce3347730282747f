use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chronicare_common::CareError;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by handlers as HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Dataset unavailable: {0}")]
    Unavailable(#[from] CareError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Template(_)    => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        error!(%status, error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
