//! Database operations for AgriQ `PostgreSQL`.
//!
//! ## Tables (schema `agriq`)
//!
//! - `product` - Product catalog
//! - `batch` - Product lots with their stock-ledger counters
//! - `movement` / `movement_detail` - Inventory movements and their lines
//! - `shipment` - Shipments produced by a movement
//! - `discard` - Discards produced by a movement
//! - `app_user` - Users who record movements
//! - `customer` / `customer_order` - Customers and their orders
//! - `session` - tower-sessions storage
//!
//! Every repository here is read-only. Failures from the store are returned
//! as [`RepositoryError::Database`] without retries or fallbacks.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run via:
//! ```bash
//! cargo run -p agriq-cli -- migrate
//! ```

pub mod batches;
pub mod customers;
pub mod movements;
pub mod products;
pub mod shipments;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use batches::BatchRepository;
pub use customers::CustomerRepository;
pub use movements::{DEFAULT_RECENT_MOVEMENTS, MAX_RECENT_MOVEMENTS, MovementRepository};
pub use products::ProductRepository;
pub use shipments::ShipmentRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Joined rows are inconsistent (e.g. an order without its customer).
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Run the embedded migrations from `crates/web/migrations/`.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
