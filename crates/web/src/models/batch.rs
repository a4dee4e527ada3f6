//! Batch domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use agriq_core::{BatchId, ProductId, StockCounters};

use super::ProductRef;

/// A tracked lot of a product with its stock-ledger counters.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    pub id: BatchId,
    pub product_id: ProductId,
    pub code: String,
    pub counters: StockCounters,
    pub created_at: DateTime<Utc>,
}

/// A batch joined with its product, flagged by the low-stock policy.
#[derive(Debug, Clone, Serialize)]
pub struct BatchWithProduct {
    pub batch: Batch,
    pub product: ProductRef,
    pub is_low_stock: bool,
}
