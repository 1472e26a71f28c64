//! Business logic services.
//!
//! Services contain the ledger rules separated from HTTP handlers:
//! account uniqueness, account-existence gating, and amount signing.
//! They depend only on the repository traits, never on each other.

pub mod account_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use transaction_service::TransactionService;
