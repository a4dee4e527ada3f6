//! Recent movements page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use agriq_core::MovementType;

use crate::{
    db::{MAX_RECENT_MOVEMENTS, MovementRepository},
    error::{AppError, Result},
    filters,
    middleware::RequestContext,
    models::{Movement, MovementDetail},
    state::AppState,
};

/// Build the movements router.
pub fn router() -> Router<AppState> {
    Router::new().route("/movements", get(index))
}

/// `?limit=N` query string shared by the page and the JSON endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl LimitQuery {
    /// Parse the requested limit; absent or blank means the default.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the value is not a non-negative integer.
    pub fn parse(&self) -> Result<Option<u32>> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<u32>().map(Some).map_err(|_| {
                AppError::BadRequest(format!(
                    "limit must be a non-negative integer (values above {MAX_RECENT_MOVEMENTS} are capped)"
                ))
            }),
        }
    }
}

/// One detail line of a movement.
#[derive(Debug, Clone)]
pub struct MovementLineView {
    pub product_name: String,
    pub batch_code: String,
    pub quantity: String,
}

impl From<&MovementDetail> for MovementLineView {
    fn from(detail: &MovementDetail) -> Self {
        Self {
            product_name: detail.product.name.clone(),
            batch_code: detail.batch.code.clone(),
            quantity: filters::format_quantity(&detail.quantity.to_string()),
        }
    }
}

/// Movement view for templates.
#[derive(Debug, Clone)]
pub struct MovementView {
    pub id: i32,
    pub kind: String,
    pub kind_class: String,
    pub created_at: String,
    pub user_name: String,
    /// Customer, shipment route or discard reason, whichever applies.
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub lines: Vec<MovementLineView>,
    pub total: String,
}

fn kind_class(kind: MovementType) -> &'static str {
    match kind {
        MovementType::Shipment => "badge-info",
        MovementType::Sale => "badge-success",
        MovementType::Discard => "badge-danger",
        MovementType::Adjustment => "badge-muted",
    }
}

impl From<&Movement> for MovementView {
    fn from(movement: &Movement) -> Self {
        let reference = movement
            .order
            .as_ref()
            .map(|order| format!("{} ({})", order.customer.name, order.customer.fiscal_condition.label()))
            .or_else(|| {
                movement
                    .shipment
                    .as_ref()
                    .map(|s| format!("{} to {} [{}]", s.origin, s.destination, s.status.label()))
            })
            .or_else(|| movement.discard.as_ref().map(|d| d.reason.clone()));

        Self {
            id: movement.id.get(),
            kind: movement.movement_type.label().to_string(),
            kind_class: kind_class(movement.movement_type).to_string(),
            created_at: movement.created_at.format("%Y-%m-%d %H:%M").to_string(),
            user_name: movement.user.name.clone(),
            reference,
            notes: movement.notes.clone(),
            lines: movement.details.iter().map(MovementLineView::from).collect(),
            total: filters::format_quantity(&movement.total_quantity().to_string()),
        }
    }
}

/// Movements page template.
#[derive(Template, WebTemplate)]
#[template(path = "movements/index.html")]
pub struct MovementsIndexTemplate {
    pub ctx: RequestContext,
    pub movements: Vec<MovementView>,
    pub limit: u32,
}

/// Recent movements page handler.
///
/// # Errors
///
/// Returns 400 for a malformed limit, 500 if the query fails.
#[instrument(skip(ctx, state))]
pub async fn index(
    ctx: RequestContext,
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<MovementsIndexTemplate> {
    let limit = query.parse()?;
    let movements = MovementRepository::new(state.pool()).recent(limit).await?;

    Ok(MovementsIndexTemplate {
        ctx,
        movements: movements.iter().map(MovementView::from).collect(),
        limit: crate::db::movements::effective_limit(limit),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use agriq_core::{
        BatchId, CustomerId, DiscardId, FiscalCondition, MovementDetailId, MovementId, OrderId,
        ProductId, UserId,
    };

    use super::*;
    use crate::models::{BatchRef, CustomerRef, DiscardRef, OrderRef, ProductRef, UserRef};

    fn limit(raw: Option<&str>) -> Result<Option<u32>> {
        LimitQuery {
            limit: raw.map(String::from),
        }
        .parse()
    }

    fn sale() -> Movement {
        Movement {
            id: MovementId::new(12),
            movement_type: MovementType::Sale,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap(),
            user: UserRef {
                id: UserId::new(1),
                name: "Ana Ruiz".to_string(),
            },
            order: Some(OrderRef {
                id: OrderId::new(3),
                customer: CustomerRef {
                    id: CustomerId::new(8),
                    name: "Verduleria Sur".to_string(),
                    fiscal_condition: FiscalCondition::Monotax,
                },
            }),
            shipment: None,
            discard: None,
            details: vec![
                MovementDetail {
                    id: MovementDetailId::new(1),
                    quantity: Decimal::new(2500, 3),
                    batch: BatchRef {
                        id: BatchId::new(4),
                        code: "TOM-0301".to_string(),
                    },
                    product: ProductRef {
                        id: ProductId::new(2),
                        code: "TOM".to_string(),
                        name: "Tomato".to_string(),
                        presentation: "Crate 10 kg".to_string(),
                    },
                },
                MovementDetail {
                    id: MovementDetailId::new(2),
                    quantity: Decimal::new(1000, 3),
                    batch: BatchRef {
                        id: BatchId::new(5),
                        code: "TOM-0302".to_string(),
                    },
                    product: ProductRef {
                        id: ProductId::new(2),
                        code: "TOM".to_string(),
                        name: "Tomato".to_string(),
                        presentation: "Crate 10 kg".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!(limit(None).unwrap(), None);
        assert_eq!(limit(Some("")).unwrap(), None);
        assert_eq!(limit(Some("0")).unwrap(), Some(0));
        assert_eq!(limit(Some(" 20 ")).unwrap(), Some(20));
        assert!(matches!(limit(Some("-1")), Err(AppError::BadRequest(_))));
        assert!(matches!(limit(Some("ten")), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_oversized_limit_is_accepted_and_capped() {
        assert_eq!(limit(Some("500")).unwrap(), Some(500));
        assert_eq!(crate::db::movements::effective_limit(Some(500)), MAX_RECENT_MOVEMENTS);

        let err = limit(Some("lots")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("non-negative integer"));
        assert!(message.contains("capped"));
        assert!(!message.contains("between"));
    }

    #[test]
    fn test_sale_view_shows_customer_and_total() {
        let view = MovementView::from(&sale());
        assert_eq!(view.kind, "Sale");
        assert_eq!(view.kind_class, "badge-success");
        assert_eq!(view.created_at, "2026-03-04 09:30");
        assert_eq!(view.reference.as_deref(), Some("Verduleria Sur (Monotax)"));
        assert_eq!(view.total, "3.5");
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].quantity, "2.5");
    }

    #[test]
    fn test_discard_view_shows_reason() {
        let mut movement = sale();
        movement.movement_type = MovementType::Discard;
        movement.order = None;
        movement.discard = Some(DiscardRef {
            id: DiscardId::new(1),
            reason: "Frost damage".to_string(),
        });

        let view = MovementView::from(&movement);
        assert_eq!(view.reference.as_deref(), Some("Frost damage"));
        assert_eq!(view.kind_class, "badge-danger");
    }

    #[test]
    fn test_movements_template_renders() {
        let template = MovementsIndexTemplate {
            ctx: RequestContext::anonymous("/movements"),
            movements: vec![MovementView::from(&sale())],
            limit: 5,
        };

        let html = template.render().unwrap();
        assert!(html.contains("Verduleria Sur"));
        assert!(html.contains("TOM-0301"));
    }
}
