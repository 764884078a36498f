//! Uniform error-to-response mapping for all handlers.

use crate::transport::http::types::MessageResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} param was not initiated")]
    MissingParam(&'static str),

    /// Submission failed the structural schema check; the detail is the
    /// validation report rendered verbatim.
    #[error("Wrong format of request: {0}")]
    WrongFormat(String),

    /// Field-level constraint violation (e.g. name too short).
    #[error("{0}")]
    Validation(String),

    #[error("{what} with id={id} was not found")]
    NotFound { what: &'static str, id: i64 },

    #[error("internal database error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) | ApiError::WrongFormat(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(e) = &self {
            // Full detail stays in the log; the client gets a generic message.
            tracing::error!(error = %e, "database failure");
        }
        (self.status(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
