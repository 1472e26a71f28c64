//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/{id} - Get account by ID
//! - GET /api/v1/accounts - List all accounts

use crate::{
    AppState,
    error::AppError,
    models::account::{AccountCreatedResponse, AccountResponse, CreateAccountRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "document_number": "12345678900"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"account_id": 1}`
/// - **Error (400)**: Document number missing or empty
/// - **Error (409)**: Document number already registered
/// - **Error (500)**: Database error
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountCreatedResponse>), AppError> {
    // Presence is validated at the edge; the service only sees
    // well-formed document numbers
    if request.document_number.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "document_number must not be empty".to_string(),
        ));
    }

    let account_id = state
        .accounts
        .create_account(&request.document_number)
        .await?;

    Ok((StatusCode::CREATED, Json(AccountCreatedResponse { account_id })))
}

/// Get a specific account by ID.
///
/// # Endpoint
///
/// `GET /api/v1/accounts/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: Account details
/// - **Error (404)**: No account with this id
///
/// ```json
/// {
///   "account_id": 1,
///   "document_number": "12345678900",
///   "created_at": "2026-01-10T10:00:00Z"
/// }
/// ```
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.accounts.get_account(account_id).await?;

    Ok(Json(account.into()))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /api/v1/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Array of accounts, oldest first
/// - **Error (404)**: The store holds no accounts at all; an empty
///   listing is reported as `account_list_empty`, never as `[]`
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = state.accounts.get_all_accounts().await?;

    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
