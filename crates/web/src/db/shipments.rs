//! Shipment reception queries.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use agriq_core::{MovementId, MovementType, ShipmentId, ShipmentStatus, UserId};

use super::RepositoryError;
use super::movements::details_by_movement;
use crate::models::{MovementDetail, PendingShipment, ShipmentMovement, UserRef};

#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: ShipmentId,
    status: ShipmentStatus,
    origin: String,
    destination: String,
    created_at: DateTime<Utc>,
    movement_id: MovementId,
    movement_type: MovementType,
    movement_created_at: DateTime<Utc>,
    user_id: UserId,
    user_name: String,
}

impl ShipmentRow {
    fn into_pending(self, details: Vec<MovementDetail>) -> PendingShipment {
        PendingShipment {
            id: self.id,
            status: self.status,
            origin: self.origin,
            destination: self.destination,
            created_at: self.created_at,
            movement: ShipmentMovement {
                id: self.movement_id,
                movement_type: self.movement_type,
                created_at: self.movement_created_at,
                user: UserRef {
                    id: self.user_id,
                    name: self.user_name,
                },
                details,
            },
        }
    }
}

/// Repository for shipment queries.
pub struct ShipmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShipmentRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Shipments still waiting to be received, newest first.
    ///
    /// Each shipment carries its movement's detail lines with batch and
    /// product, which is what the reception screen counts against.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> Result<Vec<PendingShipment>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            r"
            SELECT
                s.id, s.status, s.origin, s.destination, s.created_at,
                m.id AS movement_id, m.movement_type,
                m.created_at AS movement_created_at,
                u.id AS user_id, u.name AS user_name
            FROM agriq.shipment s
            JOIN agriq.movement m ON m.id = s.movement_id
            JOIN agriq.app_user u ON u.id = m.user_id
            WHERE s.status = $1
            ORDER BY s.created_at DESC, s.id DESC
            ",
        )
        .bind(ShipmentStatus::Pending)
        .fetch_all(self.pool)
        .await?;

        let movement_ids: Vec<MovementId> = rows.iter().map(|row| row.movement_id).collect();
        let mut details = details_by_movement(self.pool, &movement_ids).await?;

        tracing::debug!(count = rows.len(), "loaded pending shipments");

        Ok(rows
            .into_iter()
            .map(|row| {
                let lines = details.remove(&row.movement_id).unwrap_or_default();
                row.into_pending(lines)
            })
            .collect())
    }
}
