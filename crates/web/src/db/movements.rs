//! Recent movement queries.
//!
//! A movement page needs the movement, its to-one relations (user, order and
//! customer, shipment, discard) and its detail lines with batch and product.
//! The to-one relations come from one joined query; detail lines for all
//! returned movements come from a second query keyed by `movement_id = ANY($1)`
//! and are grouped in process.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use agriq_core::{
    BatchId, CustomerId, DiscardId, FiscalCondition, MovementDetailId, MovementId, MovementType,
    OrderId, ProductId, ShipmentId, ShipmentStatus, UserId,
};

use super::RepositoryError;
use crate::models::{
    BatchRef, CustomerRef, DiscardRef, Movement, MovementDetail, OrderRef, ProductRef,
    ShipmentRef, UserRef,
};

/// Number of movements returned when the caller gives no limit.
pub const DEFAULT_RECENT_MOVEMENTS: u32 = 5;

/// Upper bound on a requested limit.
pub const MAX_RECENT_MOVEMENTS: u32 = 100;

/// Resolve a requested limit to the number of rows to fetch.
#[must_use]
pub fn effective_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_RECENT_MOVEMENTS)
        .min(MAX_RECENT_MOVEMENTS)
}

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct MovementRow {
    id: MovementId,
    movement_type: MovementType,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    user_id: UserId,
    user_name: String,
    order_id: Option<OrderId>,
    customer_id: Option<CustomerId>,
    customer_name: Option<String>,
    customer_fiscal_condition: Option<FiscalCondition>,
    shipment_id: Option<ShipmentId>,
    shipment_status: Option<ShipmentStatus>,
    shipment_origin: Option<String>,
    shipment_destination: Option<String>,
    discard_id: Option<DiscardId>,
    discard_reason: Option<String>,
}

impl MovementRow {
    fn into_movement(self, details: Vec<MovementDetail>) -> Result<Movement, RepositoryError> {
        let order = match self.order_id {
            None => None,
            Some(order_id) => {
                let (Some(id), Some(name), Some(fiscal_condition)) = (
                    self.customer_id,
                    self.customer_name,
                    self.customer_fiscal_condition,
                ) else {
                    return Err(RepositoryError::DataCorruption(format!(
                        "order {order_id} of movement {} has no customer",
                        self.id
                    )));
                };
                Some(OrderRef {
                    id: order_id,
                    customer: CustomerRef {
                        id,
                        name,
                        fiscal_condition,
                    },
                })
            }
        };

        let shipment = match (
            self.shipment_id,
            self.shipment_status,
            self.shipment_origin,
            self.shipment_destination,
        ) {
            (None, ..) => None,
            (Some(id), Some(status), Some(origin), Some(destination)) => Some(ShipmentRef {
                id,
                status,
                origin,
                destination,
            }),
            (Some(id), ..) => {
                return Err(RepositoryError::DataCorruption(format!(
                    "shipment {id} has incomplete columns"
                )));
            }
        };

        let discard = match (self.discard_id, self.discard_reason) {
            (Some(id), Some(reason)) => Some(DiscardRef { id, reason }),
            (Some(id), None) => {
                return Err(RepositoryError::DataCorruption(format!(
                    "discard {id} has no reason"
                )));
            }
            (None, _) => None,
        };

        Ok(Movement {
            id: self.id,
            movement_type: self.movement_type,
            notes: self.notes,
            created_at: self.created_at,
            user: UserRef {
                id: self.user_id,
                name: self.user_name,
            },
            order,
            shipment,
            discard,
            details,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MovementDetailRow {
    id: MovementDetailId,
    movement_id: MovementId,
    quantity: Decimal,
    batch_id: BatchId,
    batch_code: String,
    product_id: ProductId,
    product_code: String,
    product_name: String,
    product_presentation: String,
}

impl From<MovementDetailRow> for MovementDetail {
    fn from(row: MovementDetailRow) -> Self {
        Self {
            id: row.id,
            quantity: row.quantity,
            batch: BatchRef {
                id: row.batch_id,
                code: row.batch_code,
            },
            product: ProductRef {
                id: row.product_id,
                code: row.product_code,
                name: row.product_name,
                presentation: row.product_presentation,
            },
        }
    }
}

/// Load the detail lines (with batch and product) of several movements.
///
/// Lines keep their insertion order within each movement.
pub(super) async fn details_by_movement(
    pool: &PgPool,
    movement_ids: &[MovementId],
) -> Result<HashMap<MovementId, Vec<MovementDetail>>, RepositoryError> {
    if movement_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let ids: Vec<i32> = movement_ids.iter().map(|id| id.get()).collect();

    let rows = sqlx::query_as::<_, MovementDetailRow>(
        r"
        SELECT
            d.id, d.movement_id, d.quantity,
            b.id AS batch_id, b.code AS batch_code,
            p.id AS product_id, p.code AS product_code,
            p.name AS product_name, p.presentation AS product_presentation
        FROM agriq.movement_detail d
        JOIN agriq.batch b ON b.id = d.batch_id
        JOIN agriq.product p ON p.id = b.product_id
        WHERE d.movement_id = ANY($1)
        ORDER BY d.movement_id, d.id
        ",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<MovementId, Vec<MovementDetail>> = HashMap::new();
    for row in rows {
        grouped.entry(row.movement_id).or_default().push(row.into());
    }
    Ok(grouped)
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for movement queries.
pub struct MovementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MovementRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The most recently created movements, newest first.
    ///
    /// Returns at most [`effective_limit`] movements, each with its detail
    /// lines, user, order and customer, shipment and discard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a joined relation is incomplete.
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: Option<u32>) -> Result<Vec<Movement>, RepositoryError> {
        let limit = effective_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, MovementRow>(
            r"
            SELECT
                m.id, m.movement_type, m.notes, m.created_at,
                u.id AS user_id, u.name AS user_name,
                o.id AS order_id,
                c.id AS customer_id, c.name AS customer_name,
                c.fiscal_condition AS customer_fiscal_condition,
                s.id AS shipment_id, s.status AS shipment_status,
                s.origin AS shipment_origin, s.destination AS shipment_destination,
                x.id AS discard_id, x.reason AS discard_reason
            FROM agriq.movement m
            JOIN agriq.app_user u ON u.id = m.user_id
            LEFT JOIN agriq.customer_order o ON o.id = m.order_id
            LEFT JOIN agriq.customer c ON c.id = o.customer_id
            LEFT JOIN agriq.shipment s ON s.movement_id = m.id
            LEFT JOIN agriq.discard x ON x.movement_id = m.id
            ORDER BY m.created_at DESC, m.id DESC
            LIMIT $1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<MovementId> = rows.iter().map(|row| row.id).collect();
        let mut details = details_by_movement(self.pool, &ids).await?;

        tracing::debug!(count = rows.len(), "loaded recent movements");

        rows.into_iter()
            .map(|row| {
                let lines = details.remove(&row.id).unwrap_or_default();
                row.into_movement(lines)
            })
            .collect()
    }
}
