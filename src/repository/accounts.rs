//! Account persistence.
//!
//! `AccountRepository` is the port the services program against;
//! `PgAccountRepository` is the Postgres adapter.

use async_trait::async_trait;

use crate::{db::DbPool, error::AppError, models::account::Account};

/// Storage capability for accounts.
///
/// Implementations must be safe for concurrent use; the services hold
/// no locks of their own.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Number of accounts registered with this document number.
    async fn count_by_document_number(&self, document_number: &str) -> Result<i64, AppError>;

    /// Insert a new account and return its assigned id.
    async fn insert_account(&self, document_number: &str) -> Result<i64, AppError>;

    /// Fetch a single account, `None` when no such row exists.
    async fn get_by_id(&self, account_id: i64) -> Result<Option<Account>, AppError>;

    /// Fetch every account, oldest first. May be empty.
    async fn get_all(&self) -> Result<Vec<Account>, AppError>;
}

/// Postgres-backed account repository.
#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn count_by_document_number(&self, document_number: &str) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE document_number = $1")
                .bind(document_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn insert_account(&self, document_number: &str) -> Result<i64, AppError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO accounts (document_number)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(document_number)
        .fetch_one(&self.pool)
        .await;

        // The schema carries UNIQUE(document_number); losing the
        // check-then-insert race still surfaces as a duplicate account
        // rather than an opaque database error.
        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::AccountExists)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn get_by_id(&self, account_id: i64) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, document_number, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, document_number, created_at
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }
}
