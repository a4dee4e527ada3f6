//! Batch statistics and listing queries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use agriq_core::{
    BatchId, BatchStatistics, InventorySummary, LowStockPolicy, ProductId, StockCounters,
};

use super::RepositoryError;
use crate::models::{Batch, BatchWithProduct, ProductRef};

// =============================================================================
// Internal Row Types
// =============================================================================

/// `SUM` of each counter; every column is NULL when the table is empty.
#[derive(Debug, sqlx::FromRow)]
struct InventorySummaryRow {
    initial: Option<Decimal>,
    deposit: Option<Decimal>,
    market: Option<Decimal>,
    sent: Option<Decimal>,
    received: Option<Decimal>,
    discarded: Option<Decimal>,
    reserved: Option<Decimal>,
    sold: Option<Decimal>,
}

impl From<InventorySummaryRow> for InventorySummary {
    fn from(row: InventorySummaryRow) -> Self {
        Self {
            initial: row.initial,
            deposit: row.deposit,
            market: row.market,
            sent: row.sent,
            received: row.received,
            discarded: row.discarded,
            reserved: row.reserved,
            sold: row.sold,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BatchWithProductRow {
    id: BatchId,
    product_id: ProductId,
    code: String,
    initial_quantity: Decimal,
    deposit_quantity: Decimal,
    market_quantity: Decimal,
    sent_quantity: Decimal,
    received_quantity: Decimal,
    discarded_quantity: Decimal,
    reserved_quantity: Decimal,
    sold_quantity: Decimal,
    discrepancy_quantity: Decimal,
    created_at: DateTime<Utc>,
    product_code: String,
    product_name: String,
    product_presentation: String,
}

impl BatchWithProductRow {
    fn into_batch(self, policy: &LowStockPolicy) -> BatchWithProduct {
        let counters = StockCounters {
            initial: self.initial_quantity,
            deposit: self.deposit_quantity,
            market: self.market_quantity,
            sent: self.sent_quantity,
            received: self.received_quantity,
            discarded: self.discarded_quantity,
            reserved: self.reserved_quantity,
            sold: self.sold_quantity,
            discrepancy: self.discrepancy_quantity,
        };

        BatchWithProduct {
            is_low_stock: policy.is_low(&counters),
            batch: Batch {
                id: self.id,
                product_id: self.product_id,
                code: self.code,
                counters,
                created_at: self.created_at,
            },
            product: ProductRef {
                id: self.product_id,
                code: self.product_code,
                name: self.product_name,
                presentation: self.product_presentation,
            },
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for batch queries.
pub struct BatchRepository<'a> {
    pool: &'a PgPool,
    policy: LowStockPolicy,
}

impl<'a> BatchRepository<'a> {
    /// Create a batch repository using the default low-stock policy.
    #[must_use]
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            policy: LowStockPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(pool: &'a PgPool, policy: LowStockPolicy) -> Self {
        Self { pool, policy }
    }

    /// Total number of batches.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agriq.batch")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Sum of the stock counters across every batch.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn inventory_summary(&self) -> Result<InventorySummary, RepositoryError> {
        let row = sqlx::query_as::<_, InventorySummaryRow>(
            r"
            SELECT
                SUM(initial_quantity) AS initial,
                SUM(deposit_quantity) AS deposit,
                SUM(market_quantity) AS market,
                SUM(sent_quantity) AS sent,
                SUM(received_quantity) AS received,
                SUM(discarded_quantity) AS discarded,
                SUM(reserved_quantity) AS reserved,
                SUM(sold_quantity) AS sold
            FROM agriq.batch
            ",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Number of batches the low-stock policy flags.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn low_stock_count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM agriq.batch
            WHERE (initial_quantity > 0 AND deposit_quantity < $1)
               OR (initial_quantity = 0 AND deposit_quantity = 0)
            ",
        )
        .bind(self.policy.deposit_threshold())
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Count, summary and low-stock count, fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first `RepositoryError` raised by any of the three queries.
    #[instrument(skip(self))]
    pub async fn statistics(&self) -> Result<BatchStatistics, RepositoryError> {
        let (total_batches, summary, low_stock_batches) = tokio::try_join!(
            self.count(),
            self.inventory_summary(),
            self.low_stock_count()
        )?;

        Ok(BatchStatistics {
            total_batches,
            low_stock_batches,
            summary,
        })
    }

    /// Every batch with its product, ordered by product name then batch code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_with_products(&self) -> Result<Vec<BatchWithProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, BatchWithProductRow>(
            r"
            SELECT
                b.id, b.product_id, b.code,
                b.initial_quantity, b.deposit_quantity, b.market_quantity,
                b.sent_quantity, b.received_quantity, b.discarded_quantity,
                b.reserved_quantity, b.sold_quantity, b.discrepancy_quantity,
                b.created_at,
                p.code AS product_code, p.name AS product_name,
                p.presentation AS product_presentation
            FROM agriq.batch b
            JOIN agriq.product p ON p.id = b.product_id
            ORDER BY p.name ASC, b.code ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_batch(&self.policy))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(initial: Decimal, deposit: Decimal) -> BatchWithProductRow {
        BatchWithProductRow {
            id: BatchId::new(1),
            product_id: ProductId::new(7),
            code: "L-001".to_string(),
            initial_quantity: initial,
            deposit_quantity: deposit,
            market_quantity: Decimal::ZERO,
            sent_quantity: Decimal::ZERO,
            received_quantity: Decimal::ZERO,
            discarded_quantity: Decimal::ZERO,
            reserved_quantity: Decimal::ZERO,
            sold_quantity: Decimal::ZERO,
            discrepancy_quantity: Decimal::ZERO,
            created_at: Utc::now(),
            product_code: "LET-02".to_string(),
            product_name: "Lettuce".to_string(),
            product_presentation: "Box 20 u".to_string(),
        }
    }

    #[test]
    fn test_batch_row_is_flagged_by_policy() {
        let policy = LowStockPolicy::default();

        let low = row(Decimal::new(5, 0), Decimal::new(5, 2)).into_batch(&policy);
        assert!(low.is_low_stock);
        assert_eq!(low.product.id, low.batch.product_id);

        let healthy = row(Decimal::new(5, 0), Decimal::new(2, 1)).into_batch(&policy);
        assert!(!healthy.is_low_stock);
    }

    #[test]
    fn test_empty_summary_row_maps_to_empty_summary() {
        let summary = InventorySummary::from(InventorySummaryRow {
            initial: None,
            deposit: None,
            market: None,
            sent: None,
            received: None,
            discarded: None,
            reserved: None,
            sold: None,
        });
        assert!(summary.is_empty());
    }
}
