use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures. The display strings are the response bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid stock query")]
    InvalidQuery,
    #[error("Error processing stock")]
    Stock(#[source] anyhow::Error),
    #[error("Error processing multiple stocks")]
    Stocks(#[source] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::Stock(source) | ApiError::Stocks(source) => {
                tracing::error!("{}: {:#}", self, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
