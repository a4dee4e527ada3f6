//! Customer listing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use crate::{
    db::CustomerRepository, error::Result, filters, middleware::RequestContext,
    models::Customer, state::AppState,
};

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new().route("/customers", get(index))
}

/// Customers page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub ctx: RequestContext,
    pub customers: Vec<Customer>,
}

/// Customers page handler.
///
/// # Errors
///
/// Returns 500 if the customer query fails.
#[instrument(skip(ctx, state))]
pub async fn index(ctx: RequestContext, State(state): State<AppState>) -> Result<CustomersIndexTemplate> {
    let customers = CustomerRepository::new(state.pool()).list_all().await?;
    Ok(CustomersIndexTemplate { ctx, customers })
}
