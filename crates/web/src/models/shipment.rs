//! Shipment reception models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use agriq_core::{MovementId, MovementType, ShipmentId, ShipmentStatus};

use super::{MovementDetail, UserRef};

/// A shipment waiting to be received, with the goods it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingShipment {
    pub id: ShipmentId,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub movement: ShipmentMovement,
}

/// The movement behind a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentMovement {
    pub id: MovementId,
    pub movement_type: MovementType,
    pub created_at: DateTime<Utc>,
    pub user: UserRef,
    pub details: Vec<MovementDetail>,
}

impl PendingShipment {
    /// Total quantity expected at destination.
    #[must_use]
    pub fn expected_quantity(&self) -> Decimal {
        self.movement.details.iter().map(|d| d.quantity).sum()
    }
}
