//! Transaction service - business rules for recording transactions.
//!
//! Creating a transaction passes through three ordered gates, each
//! short-circuiting on failure:
//!
//! 1. the operation-type code must exist in the registry; an unknown
//!    code is rejected before any repository is touched
//! 2. the referenced account must exist, checked through the account
//!    repository (never through the account service)
//! 3. the stored amount is re-signed from the operation type; the
//!    caller's sign is never trusted
//!
//! Persistence is a single atomic insert; there is no partial write
//! and nothing to compensate.

use crate::{
    error::AppError,
    models::{operation_type::OperationTypeRegistry, transaction::Transaction},
    repository::{AccountRepository, TransactionRepository},
};

/// Stateless transaction service over the two storage backends.
///
/// The registry is an immutable value owned by the service; it is
/// consulted read-only and shared by cloning.
#[derive(Debug, Clone)]
pub struct TransactionService<A, T> {
    accounts: A,
    transactions: T,
    registry: OperationTypeRegistry,
}

impl<A, T> TransactionService<A, T>
where
    A: AccountRepository,
    T: TransactionRepository,
{
    pub fn new(accounts: A, transactions: T, registry: OperationTypeRegistry) -> Self {
        Self {
            accounts,
            transactions,
            registry,
        }
    }

    /// Record a transaction, returning its id.
    ///
    /// # Errors
    ///
    /// - `TransactionTypeNotFound` if the operation-type code is not
    ///   registered; no repository call is made
    /// - `AccountNotFound` if the referenced account does not exist;
    ///   the transaction insert is never reached
    /// - any repository error, unchanged
    pub async fn create_transaction(
        &self,
        account_id: i64,
        operation_type_id: i32,
        amount_cents: i64,
    ) -> Result<i64, AppError> {
        let Some(operation) = self.registry.get(operation_type_id) else {
            tracing::warn!(operation_type_id, "unknown operation type");
            return Err(AppError::TransactionTypeNotFound);
        };

        self.accounts
            .get_by_id(account_id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        let signed_amount = operation.kind.signed_amount(amount_cents);
        tracing::debug!(
            account_id,
            operation = operation.description,
            signed_amount,
            "recording transaction"
        );
        self.transactions
            .insert_transaction(account_id, operation_type_id, signed_amount)
            .await
    }

    /// Fetch a single transaction.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if no such row exists
    /// - any repository error, unchanged
    pub async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction, AppError> {
        self.transactions
            .get_by_id(transaction_id)
            .await?
            .ok_or(AppError::TransactionNotFound)
    }
}
