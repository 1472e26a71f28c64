//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are
//! converted into HTTP responses with appropriate status codes and
//! JSON bodies.
//!
//! # Error Categories
//!
//! - **Conflict**: An account already exists for a document number
//! - **Not Found**: Requested or listed resource is absent
//! - **Domain Rejection**: Operation-type code not in the registry
//! - **Validation**: Invalid request data
//! - **Infrastructure**: Any sqlx error, passed through the service
//!   layer untouched and hidden from clients at the HTTP boundary
//!
//! Callers distinguish domain errors by variant, never by message
//! text, so layers stay decoupled from wording.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// The service layer returns these directly; axum handlers rely on the
/// `IntoResponse` impl below to render them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    ///
    /// Wraps any sqlx::Error via `#[from]`. The services never inspect
    /// or reinterpret these; they surface here unchanged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An account with the requested document number already exists.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Account already exists")]
    AccountExists,

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// The account listing came back with zero rows.
    ///
    /// Listing never returns an empty success; an empty store is
    /// reported as this error. Returns HTTP 404 Not Found.
    #[error("No accounts found")]
    AccountListEmpty,

    /// Requested transaction does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// Operation-type code is not in the registry.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Transaction type not found")]
    TransactionTypeNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request. The String carries the detail.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountExists` → 409 Conflict
/// - `AccountNotFound` → 404 Not Found
/// - `AccountListEmpty` → 404 Not Found
/// - `TransactionNotFound` → 404 Not Found
/// - `TransactionTypeNotFound` → 422 Unprocessable Entity
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::AccountExists => {
                (StatusCode::CONFLICT, "account_exists", self.to_string())
            }
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::AccountListEmpty => {
                (StatusCode::NOT_FOUND, "account_list_empty", self.to_string())
            }
            AppError::TransactionNotFound => (
                StatusCode::NOT_FOUND,
                "transaction_not_found",
                self.to_string(),
            ),
            AppError::TransactionTypeNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "transaction_type_not_found",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
