//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls into the service layer
//! 3. Returns an HTTP response (JSON, status code)

/// Account management endpoints
pub mod accounts;
/// Liveness probe
pub mod health;
/// Transaction endpoints
pub mod transactions;
