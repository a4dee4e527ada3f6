//! Product catalog queries.

use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;
use crate::models::Product;

/// Repository for product queries.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All active products, alphabetically by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT
                id, code, name, price, active,
                category, product_type, presentation, image_url,
                created_at
            FROM agriq.product
            WHERE active = TRUE
            ORDER BY name ASC, id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = products.len(), "loaded active products");
        Ok(products)
    }
}
