//! JSON API handlers.
//!
//! The same reads the pages use, serialized as-is for scripts and
//! integrations. Decimal quantities serialize as strings.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use tracing::instrument;

use agriq_core::BatchStatistics;

use crate::{
    db::{BatchRepository, MovementRepository, ProductRepository, ShipmentRepository},
    error::Result,
    models::{Movement, PendingShipment, Product},
    routes::movements::LimitQuery,
    state::AppState,
};

/// Build the JSON API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/movements", get(movements))
        .route("/api/products", get(products))
        .route("/api/shipments/pending", get(pending_shipments))
        .route("/api/batches/stats", get(batch_stats))
}

/// Recent movements.
///
/// # Errors
///
/// Returns 400 for a malformed limit, 500 if the query fails.
#[instrument(skip(state))]
pub async fn movements(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Movement>>> {
    let limit = query.parse()?;
    let movements = MovementRepository::new(state.pool()).recent(limit).await?;
    Ok(Json(movements))
}

/// Active products.
///
/// # Errors
///
/// Returns 500 if the query fails.
#[instrument(skip(state))]
pub async fn products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(ProductRepository::new(state.pool()).list_active().await?))
}

/// Pending shipments.
///
/// # Errors
///
/// Returns 500 if the query fails.
#[instrument(skip(state))]
pub async fn pending_shipments(State(state): State<AppState>) -> Result<Json<Vec<PendingShipment>>> {
    Ok(Json(ShipmentRepository::new(state.pool()).list_pending().await?))
}

/// Batch count, inventory summary and low-stock count.
///
/// # Errors
///
/// Returns 500 if any of the three queries fails.
#[instrument(skip(state))]
pub async fn batch_stats(State(state): State<AppState>) -> Result<Json<BatchStatistics>> {
    Ok(Json(BatchRepository::new(state.pool()).statistics().await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use agriq_core::InventorySummary;

    use super::*;

    #[test]
    fn test_statistics_json_shape() {
        let stats = BatchStatistics {
            total_batches: 3,
            low_stock_batches: 1,
            summary: InventorySummary {
                deposit: Some(Decimal::new(4250, 2)),
                ..InventorySummary::default()
            },
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["total_batches"], 3);
        assert_eq!(json["low_stock_batches"], 1);
        assert_eq!(json["summary"]["deposit"], "42.50");
        assert!(json["summary"]["sold"].is_null());
    }
}
