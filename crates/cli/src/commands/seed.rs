//! Demo data seeding.
//!
//! Loads a small, self-consistent inventory: users, customers, products,
//! batches (one of them low on stock, one never stocked) and movements of
//! every kind, including one pending shipment.

use sqlx::PgPool;

use super::{CliError, connect};

const DEMO_DATA: &str = include_str!("demo_data.sql");

const RESET_SQL: &str = r"
TRUNCATE
    agriq.discard, agriq.shipment, agriq.movement_detail, agriq.movement,
    agriq.batch, agriq.product, agriq.customer_order, agriq.customer,
    agriq.app_user
RESTART IDENTITY CASCADE
";

/// Insert the demo data set.
///
/// # Errors
///
/// Returns `CliError::AlreadySeeded` if products exist and `reset` is false,
/// or a database error if any statement fails (nothing is committed then).
pub async fn run(reset: bool) -> Result<(), CliError> {
    let pool = connect().await?;
    seed(&pool, reset).await?;
    tracing::info!("Demo data loaded");
    Ok(())
}

async fn seed(pool: &PgPool, reset: bool) -> Result<(), CliError> {
    let mut tx = pool.begin().await?;

    if reset {
        tracing::warn!("Truncating inventory tables");
        sqlx::raw_sql(RESET_SQL).execute(&mut *tx).await?;
    } else {
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agriq.product")
            .fetch_one(&mut *tx)
            .await?;
        if products > 0 {
            return Err(CliError::AlreadySeeded(format!(
                "{products} products already exist (use --reset)"
            )));
        }
    }

    sqlx::raw_sql(DEMO_DATA).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}
