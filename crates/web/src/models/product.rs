//! Product domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use agriq_core::{Price, ProductId};

/// A sellable product from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    /// Short catalog code (e.g. "TOM-01").
    pub code: String,
    pub name: String,
    pub price: Price,
    /// Inactive products are hidden from listings but keep their batches.
    pub active: bool,
    pub category: String,
    pub product_type: String,
    /// Packaging, e.g. "Crate 10 kg".
    pub presentation: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Product fields embedded in batch and movement views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRef {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub presentation: String,
}
