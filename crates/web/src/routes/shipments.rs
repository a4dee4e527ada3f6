//! Shipment reception page.
//!
//! Lists shipments still in `PENDING` with the lines the receiver checks
//! against. Receiving is a write workflow and is not served here.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use crate::{
    db::ShipmentRepository, error::Result, filters, middleware::RequestContext,
    models::PendingShipment, routes::movements::MovementLineView, state::AppState,
};

/// Build the shipments router.
pub fn router() -> Router<AppState> {
    Router::new().route("/shipments/pending", get(pending))
}

/// Pending shipment view for templates.
#[derive(Debug, Clone)]
pub struct PendingShipmentView {
    pub id: i32,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub created_at: String,
    pub sent_by: String,
    pub lines: Vec<MovementLineView>,
    pub expected: String,
}

impl From<&PendingShipment> for PendingShipmentView {
    fn from(shipment: &PendingShipment) -> Self {
        Self {
            id: shipment.id.get(),
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            status: shipment.status.label().to_string(),
            created_at: shipment.created_at.format("%Y-%m-%d %H:%M").to_string(),
            sent_by: shipment.movement.user.name.clone(),
            lines: shipment
                .movement
                .details
                .iter()
                .map(MovementLineView::from)
                .collect(),
            expected: filters::format_quantity(&shipment.expected_quantity().to_string()),
        }
    }
}

/// Pending shipments page template.
#[derive(Template, WebTemplate)]
#[template(path = "shipments/pending.html")]
pub struct PendingShipmentsTemplate {
    pub ctx: RequestContext,
    pub shipments: Vec<PendingShipmentView>,
}

/// Pending shipments page handler.
///
/// # Errors
///
/// Returns 500 if the shipment query fails.
#[instrument(skip(ctx, state))]
pub async fn pending(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> Result<PendingShipmentsTemplate> {
    let shipments = ShipmentRepository::new(state.pool()).list_pending().await?;

    Ok(PendingShipmentsTemplate {
        ctx,
        shipments: shipments.iter().map(PendingShipmentView::from).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use agriq_core::{
        BatchId, MovementDetailId, MovementId, MovementType, ProductId, ShipmentId,
        ShipmentStatus, UserId,
    };

    use super::*;
    use crate::models::{BatchRef, MovementDetail, ProductRef, ShipmentMovement, UserRef};

    fn shipment() -> PendingShipment {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 2, 7, 15, 0).unwrap();
        PendingShipment {
            id: ShipmentId::new(31),
            status: ShipmentStatus::Pending,
            origin: "Farm".to_string(),
            destination: "Central market".to_string(),
            created_at,
            movement: ShipmentMovement {
                id: MovementId::new(77),
                movement_type: MovementType::Shipment,
                created_at,
                user: UserRef {
                    id: UserId::new(2),
                    name: "Luis Gomez".to_string(),
                },
                details: vec![MovementDetail {
                    id: MovementDetailId::new(9),
                    quantity: Decimal::new(12_000, 3),
                    batch: BatchRef {
                        id: BatchId::new(3),
                        code: "SQU-0228".to_string(),
                    },
                    product: ProductRef {
                        id: ProductId::new(4),
                        code: "SQU".to_string(),
                        name: "Squash".to_string(),
                        presentation: "Sack 25 kg".to_string(),
                    },
                }],
            },
        }
    }

    #[test]
    fn test_pending_view() {
        let view = PendingShipmentView::from(&shipment());
        assert_eq!(view.status, "Pending");
        assert_eq!(view.expected, "12");
        assert_eq!(view.sent_by, "Luis Gomez");
    }

    #[test]
    fn test_pending_template_renders() {
        let template = PendingShipmentsTemplate {
            ctx: RequestContext::anonymous("/shipments/pending"),
            shipments: vec![PendingShipmentView::from(&shipment())],
        };
        let html = template.render().unwrap();
        assert!(html.contains("Central market"));
        assert!(html.contains("SQU-0228"));
    }
}
