//! Error types for the repository and their RPC mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use todo_core::ErrorMessage;

/// Failures surfaced by a `TodoStore`.
///
/// `NotFound` carries the id so the RPC failure identifies the row; every
/// underlying database failure lands in `Store` unchanged. Nothing is
/// retried.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RepositoryError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            RepositoryError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let body = Json(ErrorMessage {
            code: code.to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
