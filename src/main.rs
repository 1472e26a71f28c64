//! Ledger Service - Main Application Entry Point
//!
//! REST API server for managing accounts and the signed transactions
//! recorded against them. Accounts are unique per document number;
//! transaction amounts are stored with the sign their operation type
//! dictates (debits negative, credits positive).
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Business rules**: service layer over repository traits
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Wire repositories and services into shared state
//! 5. Build HTTP router and start server on the configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repository;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    db::DbPool,
    models::operation_type::OperationTypeRegistry,
    repository::{PgAccountRepository, PgTransactionRepository},
    services::{AccountService, TransactionService},
};

/// Shared application state handed to every handler.
///
/// Everything in here is cheaply cloneable; the services are stateless
/// and the repositories share the one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub accounts: AccountService<PgAccountRepository>,
    pub transactions: TransactionService<PgAccountRepository, PgTransactionRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG
    // environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Wire repositories into services. The transaction service takes
    // the account repository directly, not the account service, and
    // owns an immutable copy of the operation-type registry.
    let account_repo = PgAccountRepository::new(pool.clone());
    let transaction_repo = PgTransactionRepository::new(pool.clone());
    let state = AppState {
        pool: pool.clone(),
        accounts: AccountService::new(account_repo.clone()),
        transactions: TransactionService::new(
            account_repo,
            transaction_repo,
            OperationTypeRegistry::standard(),
        ),
    };

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        // Transaction routes
        .route(
            "/api/v1/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        // Add request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share state with all handlers via State extraction
        .with_state(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    axum::serve(listener, app).await?;

    Ok(())
}
