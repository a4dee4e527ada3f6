//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use rust_decimal::Decimal;
use tracing::instrument;

use agriq_core::{BatchStatistics, InventorySummary};

use crate::{
    db::{BatchRepository, MovementRepository},
    error::Result,
    filters,
    middleware::RequestContext,
    routes::movements::MovementView,
    state::AppState,
};

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// One labelled total in the inventory summary card.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Summary rows in ledger order. A total with no batches behind it reads "-".
#[must_use]
pub fn summary_rows(summary: &InventorySummary) -> Vec<SummaryRow> {
    let row = |label, value: Option<Decimal>| SummaryRow {
        label,
        value: value.map_or_else(
            || "-".to_string(),
            |v| filters::format_quantity(&v.to_string()),
        ),
    };

    vec![
        row("Initial", summary.initial),
        row("In deposit", summary.deposit),
        row("At market", summary.market),
        row("Sent", summary.sent),
        row("Received", summary.received),
        row("Discarded", summary.discarded),
        row("Reserved", summary.reserved),
        row("Sold", summary.sold),
    ]
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: RequestContext,
    pub total_batches: i64,
    pub low_stock_batches: i64,
    pub summary: Vec<SummaryRow>,
    /// Most recent movements, default limit.
    pub movements: Vec<MovementView>,
}

impl DashboardTemplate {
    fn new(ctx: RequestContext, stats: &BatchStatistics, movements: Vec<MovementView>) -> Self {
        Self {
            ctx,
            total_batches: stats.total_batches,
            low_stock_batches: stats.low_stock_batches,
            summary: summary_rows(&stats.summary),
            movements,
        }
    }
}

/// Dashboard page handler.
///
/// # Errors
///
/// Returns 500 if the statistics or movement queries fail.
#[instrument(skip(ctx, state))]
pub async fn index(ctx: RequestContext, State(state): State<AppState>) -> Result<DashboardTemplate> {
    let batches = BatchRepository::new(state.pool());
    let movements = MovementRepository::new(state.pool());

    let (stats, recent) = tokio::try_join!(batches.statistics(), movements.recent(None))?;

    Ok(DashboardTemplate::new(
        ctx,
        &stats,
        recent.iter().map(MovementView::from).collect(),
    ))
}
