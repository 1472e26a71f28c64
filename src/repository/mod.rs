//! Persistence abstractions and their Postgres implementations.
//!
//! The service layer depends only on the traits defined here; the
//! Postgres types are injected at startup. Tests swap in hand-rolled
//! mocks.

pub mod accounts;
pub mod transactions;

pub use accounts::{AccountRepository, PgAccountRepository};
pub use transactions::{PgTransactionRepository, TransactionRepository};
