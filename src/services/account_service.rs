//! Account service - business rules for account management.
//!
//! This service decides whether an account may be created and how
//! lookups report missing data:
//! - Document numbers are unique; a duplicate is rejected before any
//!   insert is attempted.
//! - A lookup miss is `AccountNotFound`.
//! - Listing never succeeds with zero rows; an empty store is
//!   `AccountListEmpty`.
//!
//! Repository failures pass through untouched; this layer performs no
//! retries and no recovery.

use crate::{error::AppError, models::account::Account, repository::AccountRepository};

/// Stateless account service over a storage backend.
///
/// Holds no mutable state; safe to clone and call concurrently.
#[derive(Debug, Clone)]
pub struct AccountService<R> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create an account for a document number, returning its id.
    ///
    /// # Errors
    ///
    /// - `AccountExists` if the document number is already registered;
    ///   no insert is attempted in that case
    /// - any repository error, unchanged
    pub async fn create_account(&self, document_number: &str) -> Result<i64, AppError> {
        let existing = self.repo.count_by_document_number(document_number).await?;
        if existing > 0 {
            tracing::warn!(document_number, "account already exists");
            return Err(AppError::AccountExists);
        }

        self.repo.insert_account(document_number).await
    }

    /// Fetch a single account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no such row exists
    /// - any repository error, unchanged
    pub async fn get_account(&self, account_id: i64) -> Result<Account, AppError> {
        self.repo
            .get_by_id(account_id)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    /// Fetch every account, in repository order.
    ///
    /// # Errors
    ///
    /// - `AccountListEmpty` if the store holds no accounts; callers
    ///   never receive a zero-length success from this operation
    /// - any repository error, unchanged
    pub async fn get_all_accounts(&self) -> Result<Vec<Account>, AppError> {
        let accounts = self.repo.get_all().await?;
        if accounts.is_empty() {
            return Err(AppError::AccountListEmpty);
        }

        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    fn infra_error() -> AppError {
        AppError::Database(sqlx::Error::PoolClosed)
    }

    fn account(id: i64, document_number: &str) -> Account {
        Account {
            id,
            document_number: document_number.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Configurable stand-in for the Postgres repository. Shared
    /// counters survive the clone handed to the service.
    #[derive(Clone, Default)]
    struct MockAccountRepo {
        existing_count: i64,
        // when set, count_by_document_number reports inserts made so
        // far, so back-to-back creates see each other's writes
        count_tracks_inserts: bool,
        // when set, insert_account enforces document-number uniqueness
        // the way the UNIQUE constraint does
        unique_inserts: bool,
        next_id: i64,
        fail_count: bool,
        fail_insert: bool,
        fail_get: bool,
        fail_get_all: bool,
        stored: Option<Account>,
        all: Vec<Account>,
        insert_calls: Arc<AtomicUsize>,
        inserted_docs: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepo {
        async fn count_by_document_number(&self, _document_number: &str) -> Result<i64, AppError> {
            if self.fail_count {
                return Err(infra_error());
            }
            if self.count_tracks_inserts {
                return Ok(self.insert_calls.load(Ordering::SeqCst) as i64);
            }
            Ok(self.existing_count)
        }

        async fn insert_account(&self, document_number: &str) -> Result<i64, AppError> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_insert {
                return Err(infra_error());
            }
            let mut docs = self.inserted_docs.lock().unwrap();
            if self.unique_inserts && docs.iter().any(|d| d == document_number) {
                return Err(AppError::AccountExists);
            }
            docs.push(document_number.to_string());
            Ok(self.next_id)
        }

        async fn get_by_id(&self, _account_id: i64) -> Result<Option<Account>, AppError> {
            if self.fail_get {
                return Err(infra_error());
            }
            Ok(self.stored.clone())
        }

        async fn get_all(&self) -> Result<Vec<Account>, AppError> {
            if self.fail_get_all {
                return Err(infra_error());
            }
            Ok(self.all.clone())
        }
    }

    #[tokio::test]
    async fn create_account_returns_repository_id() {
        let repo = MockAccountRepo {
            next_id: 21,
            ..Default::default()
        };
        let service = AccountService::new(repo.clone());

        let id = service.create_account("12345").await.unwrap();

        assert_eq!(id, 21);
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*repo.inserted_docs.lock().unwrap(), vec!["12345"]);
    }

    #[tokio::test]
    async fn create_account_rejects_duplicate_document_number() {
        let repo = MockAccountRepo {
            existing_count: 1,
            ..Default::default()
        };
        let service = AccountService::new(repo.clone());

        let err = service.create_account("12345").await.unwrap_err();

        assert!(matches!(err, AppError::AccountExists));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_account_twice_inserts_exactly_once() {
        let repo = MockAccountRepo {
            count_tracks_inserts: true,
            next_id: 1,
            ..Default::default()
        };
        let service = AccountService::new(repo.clone());

        assert!(service.create_account("12345").await.is_ok());
        let err = service.create_account("12345").await.unwrap_err();

        assert!(matches!(err, AppError::AccountExists));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn racing_duplicate_creates_resolve_to_one_insert() {
        // both calls pass the stale count pre-check; the storage-level
        // uniqueness decides the winner
        let repo = MockAccountRepo {
            unique_inserts: true,
            next_id: 1,
            ..Default::default()
        };
        let service = AccountService::new(repo.clone());

        let (first, second) = tokio::join!(
            service.create_account("12345"),
            service.create_account("12345")
        );

        assert!(first.is_ok());
        assert!(matches!(second.unwrap_err(), AppError::AccountExists));
        // both reached the insert, only one row landed
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 2);
        assert_eq!(*repo.inserted_docs.lock().unwrap(), vec!["12345"]);
    }

    #[tokio::test]
    async fn create_account_propagates_count_failure() {
        let repo = MockAccountRepo {
            fail_count: true,
            ..Default::default()
        };
        let service = AccountService::new(repo.clone());

        let err = service.create_account("12345").await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_account_propagates_insert_failure() {
        let repo = MockAccountRepo {
            fail_insert: true,
            ..Default::default()
        };
        let service = AccountService::new(repo);

        let err = service.create_account("12345").await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn get_account_returns_stored_row() {
        let repo = MockAccountRepo {
            stored: Some(account(1, "12345")),
            ..Default::default()
        };
        let service = AccountService::new(repo);

        let found = service.get_account(1).await.unwrap();

        assert_eq!(found.id, 1);
        assert_eq!(found.document_number, "12345");
    }

    #[tokio::test]
    async fn get_account_misses_as_not_found() {
        let service = AccountService::new(MockAccountRepo::default());

        let err = service.get_account(123).await.unwrap_err();

        assert!(matches!(err, AppError::AccountNotFound));
    }

    #[tokio::test]
    async fn get_account_propagates_repository_failure() {
        let repo = MockAccountRepo {
            fail_get: true,
            ..Default::default()
        };
        let service = AccountService::new(repo);

        let err = service.get_account(123).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn get_all_accounts_keeps_repository_order() {
        let repo = MockAccountRepo {
            all: vec![account(1, "12345"), account(2, "12346")],
            ..Default::default()
        };
        let service = AccountService::new(repo);

        let accounts = service.get_all_accounts().await.unwrap();

        let ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn get_all_accounts_empty_store_is_an_error() {
        let service = AccountService::new(MockAccountRepo::default());

        let err = service.get_all_accounts().await.unwrap_err();

        assert!(matches!(err, AppError::AccountListEmpty));
    }

    #[tokio::test]
    async fn get_all_accounts_propagates_repository_failure() {
        let repo = MockAccountRepo {
            fail_get_all: true,
            ..Default::default()
        };
        let service = AccountService::new(repo);

        let err = service.get_all_accounts().await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
