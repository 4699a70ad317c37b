//! API error taxonomy
//!
//! Every failing endpoint renders as an [`ErrorResponse`] body; database
//! details are logged and never echoed to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input, unparseable date filters, missing
    /// referenced entities, inactive carousels
    #[error("{0}")]
    Validation(String),

    /// Identifier has no matching row
    #[error("{0}")]
    NotFound(String),

    /// Identifier already exists on create
    #[error("{0}")]
    Conflict(String),

    /// Storage or connectivity failure
    #[error("internal database error")]
    Database(#[from] sea_orm::DbErr),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // Conflicts surface as 400 like every other client error on
            // this API, not 409
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "ALREADY_EXISTS",
            ApiError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            error!("Database error: {}", e);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: Some(self.code().to_string()),
        };

        (self.status(), Json(body)).into_response()
    }
}
