//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account holder
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account is identified by the
/// document number of its holder; no two accounts may share one
/// (enforced by a UNIQUE constraint).
///
/// Accounts are write-once: created through the API and never updated
/// or deleted afterwards.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,

    /// Document number identifying the account holder
    pub document_number: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "document_number": "12345678900"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Document number for the new account, must be non-empty
    pub document_number: String,
}

/// Response body for a successful account creation.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": 1
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountCreatedResponse {
    /// Identifier of the newly created account
    pub account_id: i64,
}

/// Response body for account lookup endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": 1,
///   "document_number": "12345678900",
///   "created_at": "2026-01-10T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub account_id: i64,

    /// Document number of the account holder
    pub document_number: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Convert database Account to API AccountResponse.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            document_number: account.document_number,
            created_at: account.created_at,
        }
    }
}
