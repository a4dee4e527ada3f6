//! Movement domain models.
//!
//! A movement is a recorded change of inventory state made of one or more
//! detail lines, each pointing at a batch. Shipment and discard records hang
//! off the movement that produced them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use agriq_core::{
    BatchId, DiscardId, MovementDetailId, MovementId, MovementType, OrderId, ShipmentId,
    ShipmentStatus,
};

use super::{CustomerRef, ProductRef, UserRef};

/// A movement with every relation the pages display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movement {
    pub id: MovementId,
    pub movement_type: MovementType,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// User who recorded the movement.
    pub user: UserRef,
    /// Customer order for sales.
    pub order: Option<OrderRef>,
    pub shipment: Option<ShipmentRef>,
    pub discard: Option<DiscardRef>,
    pub details: Vec<MovementDetail>,
}

impl Movement {
    /// Sum of the detail line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.details.iter().map(|d| d.quantity).sum()
    }
}

/// One line of a movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementDetail {
    pub id: MovementDetailId,
    pub quantity: Decimal,
    pub batch: BatchRef,
    pub product: ProductRef,
}

/// Batch fields embedded in detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRef {
    pub id: BatchId,
    pub code: String,
}

/// A customer order referenced by a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRef {
    pub id: OrderId,
    pub customer: CustomerRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentRef {
    pub id: ShipmentId,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardRef {
    pub id: DiscardId,
    pub reason: String,
}
