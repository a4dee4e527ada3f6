//! Customer queries.

use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;
use crate::models::Customer;

/// Repository for customer queries.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, tax_id, fiscal_condition, email, phone, created_at
            FROM agriq.customer
            ORDER BY name ASC, id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }
}
