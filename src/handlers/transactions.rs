//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoints:
//! - POST /api/v1/transactions - Record a transaction
//! - GET /api/v1/transactions/{id} - Get transaction by ID

use crate::{
    AppState,
    error::AppError,
    models::transaction::{
        CreateTransactionRequest, TransactionCreatedResponse, TransactionResponse,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Record a transaction against an account.
///
/// # Endpoint
///
/// `POST /api/v1/transactions`
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": 1,
///   "operation_type_id": 4,
///   "amount_cents": 12345
/// }
/// ```
///
/// The amount is a magnitude; the stored sign comes from the
/// operation type (debit codes are stored negative).
///
/// # Response
///
/// - **Success (201 Created)**: `{"transaction_id": 7}`
/// - **Error (404)**: Referenced account does not exist
/// - **Error (422)**: Unknown operation-type code
/// - **Error (500)**: Database error
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionCreatedResponse>), AppError> {
    let transaction_id = state
        .transactions
        .create_transaction(
            request.account_id,
            request.operation_type_id,
            request.amount_cents,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionCreatedResponse { transaction_id }),
    ))
}

/// Get a specific transaction by ID.
///
/// # Endpoint
///
/// `GET /api/v1/transactions/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: Transaction details, amount as stored
///   (signed)
/// - **Error (404)**: No transaction with this id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state.transactions.get_transaction(transaction_id).await?;

    Ok(Json(transaction.into()))
}
