//! Transaction persistence.

use async_trait::async_trait;

use crate::{db::DbPool, error::AppError, models::transaction::Transaction};

/// Storage capability for transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Insert a transaction and return its assigned id.
    ///
    /// `amount_cents` arrives already signed; this layer stores it
    /// verbatim in a single atomic insert.
    async fn insert_transaction(
        &self,
        account_id: i64,
        operation_type_id: i32,
        amount_cents: i64,
    ) -> Result<i64, AppError>;

    /// Fetch a single transaction, `None` when no such row exists.
    async fn get_by_id(&self, transaction_id: i64) -> Result<Option<Transaction>, AppError>;
}

/// Postgres-backed transaction repository.
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: DbPool,
}

impl PgTransactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn insert_transaction(
        &self,
        account_id: i64,
        operation_type_id: i32,
        amount_cents: i64,
    ) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (account_id, operation_type_id, amount_cents)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(account_id)
        .bind(operation_type_id)
        .bind(amount_cents)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, transaction_id: i64) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, account_id, operation_type_id, amount_cents, event_date
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }
}
