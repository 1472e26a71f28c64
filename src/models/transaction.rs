//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a ledger movement
//! - `CreateTransactionRequest`: Request body for creating transactions
//! - `TransactionCreatedResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - References exactly one account
/// - Carries the operation-type code it was created with
/// - Stores its amount in signed cents (never floats)
///
/// # Amount Sign
///
/// The stored sign is derived from the operation type, not from the
/// caller: debit operations (purchases, withdrawals) are negative,
/// credit operations (payments) are positive.
///
/// Transactions are write-once: never updated or deleted.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,

    /// Account this transaction belongs to
    pub account_id: i64,

    /// Operation-type code (see `models::operation_type`)
    pub operation_type_id: i32,

    /// Signed amount in cents
    pub amount_cents: i64,

    /// When the transaction took place
    pub event_date: DateTime<Utc>,
}

/// Request body for creating a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": 1,
///   "operation_type_id": 4,
///   "amount_cents": 12345
/// }
/// ```
///
/// The supplied amount is treated as a magnitude; its stored sign is
/// decided by the operation type.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Account to record the transaction against
    pub account_id: i64,

    /// Operation-type code, must exist in the registry
    pub operation_type_id: i32,

    /// Amount in cents, sign recomputed server-side
    pub amount_cents: i64,
}

/// Response body for a successful transaction creation.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_id": 7
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionCreatedResponse {
    /// Identifier of the newly created transaction
    pub transaction_id: i64,
}

/// Response body for transaction lookup.
///
/// # JSON Example
///
/// ```json
/// {
///   "transaction_id": 7,
///   "account_id": 1,
///   "operation_type_id": 1,
///   "amount_cents": -12345,
///   "event_date": "2026-01-10T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub account_id: i64,
    pub operation_type_id: i32,
    pub amount_cents: i64,
    pub event_date: DateTime<Utc>,
}

/// Convert database Transaction to API TransactionResponse.
impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction_id: transaction.id,
            account_id: transaction.account_id,
            operation_type_id: transaction.operation_type_id,
            amount_cents: transaction.amount_cents,
            event_date: transaction.event_date,
        }
    }
}
