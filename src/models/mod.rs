//! Data models representing database entities and API payloads.
//!
//! This module contains the structures that map to database tables,
//! the request/response types exchanged with API clients, and the
//! fixed operation-type registry.

/// Account model
pub mod account;
/// Operation-type registry (debit/credit classification)
pub mod operation_type;
/// Transaction model
pub mod transaction;
