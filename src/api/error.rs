use crate::core::error::BookingError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

/// Errors a handler can end with.
///
/// Internal failures are logged here and leave the response body opaque.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("admin session required")]
    Unauthorized,

    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "admin session required").into_response()
            }
            ApiError::Render(e) => {
                error!("{e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            ApiError::Booking(e) => {
                error!("{e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
