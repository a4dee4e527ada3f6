//! Batch listing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use agriq_core::BatchStatistics;

use crate::{
    db::BatchRepository, error::Result, filters, middleware::RequestContext,
    models::BatchWithProduct, state::AppState,
};

/// Build the batches router.
pub fn router() -> Router<AppState> {
    Router::new().route("/batches", get(index))
}

/// Batches page template.
#[derive(Template, WebTemplate)]
#[template(path = "batches/index.html")]
pub struct BatchesIndexTemplate {
    pub ctx: RequestContext,
    pub batches: Vec<BatchWithProduct>,
    pub stats: BatchStatistics,
}

/// Batches page handler.
///
/// # Errors
///
/// Returns 500 if either query fails.
#[instrument(skip(ctx, state))]
pub async fn index(ctx: RequestContext, State(state): State<AppState>) -> Result<BatchesIndexTemplate> {
    let repo = BatchRepository::new(state.pool());
    let (batches, stats) = tokio::try_join!(repo.list_with_products(), repo.statistics())?;

    Ok(BatchesIndexTemplate {
        ctx,
        batches,
        stats,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use agriq_core::{BatchId, InventorySummary, ProductId, StockCounters};

    use super::*;
    use crate::models::{Batch, ProductRef};

    #[test]
    fn test_batches_template_flags_low_stock() {
        let batch = BatchWithProduct {
            batch: Batch {
                id: BatchId::new(1),
                product_id: ProductId::new(1),
                code: "CAR-0110".to_string(),
                counters: StockCounters {
                    initial: Decimal::new(50, 0),
                    deposit: Decimal::new(50, 3),
                    ..StockCounters::default()
                },
                created_at: Utc::now(),
            },
            product: ProductRef {
                id: ProductId::new(1),
                code: "CAR".to_string(),
                name: "Carrot".to_string(),
                presentation: "Bag 5 kg".to_string(),
            },
            is_low_stock: true,
        };
        let template = BatchesIndexTemplate {
            ctx: RequestContext::anonymous("/batches"),
            stats: BatchStatistics {
                total_batches: 1,
                low_stock_batches: 1,
                summary: InventorySummary::from_counters([&batch.batch.counters]),
            },
            batches: vec![batch],
        };

        let html = template.render().unwrap();
        assert!(html.contains("CAR-0110"));
        assert!(html.contains("Low stock"));
        assert!(html.contains("0.05"));
    }
}
