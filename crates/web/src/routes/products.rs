//! Active product catalog page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use crate::{
    db::ProductRepository, error::Result, filters, middleware::RequestContext,
    models::Product, state::AppState,
};

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new().route("/products", get(index))
}

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub code: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub product_type: String,
    pub presentation: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            product_type: product.product_type.clone(),
            presentation: product.presentation.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub ctx: RequestContext,
    pub products: Vec<ProductView>,
}

/// Active products page handler.
///
/// # Errors
///
/// Returns 500 if the product query fails.
#[instrument(skip(ctx, state))]
pub async fn index(ctx: RequestContext, State(state): State<AppState>) -> Result<ProductsIndexTemplate> {
    let products = ProductRepository::new(state.pool()).list_active().await?;

    Ok(ProductsIndexTemplate {
        ctx,
        products: products.iter().map(ProductView::from).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use agriq_core::{Price, ProductId};

    use super::*;

    fn lettuce() -> Product {
        Product {
            id: ProductId::new(1),
            code: "LET-02".to_string(),
            name: "Butter lettuce".to_string(),
            price: Price::new(Decimal::new(1250, 2)),
            active: true,
            category: "Leafy greens".to_string(),
            product_type: "Fresh".to_string(),
            presentation: "Box 20 u".to_string(),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_product_view_formats_price() {
        let view = ProductView::from(&lettuce());
        assert_eq!(view.price, "$12.50");
        assert_eq!(view.code, "LET-02");
    }

    #[test]
    fn test_products_template_renders_empty_state() {
        let template = ProductsIndexTemplate {
            ctx: RequestContext::anonymous("/products"),
            products: vec![],
        };
        let html = template.render().unwrap();
        assert!(html.contains("No active products"));
    }

    #[test]
    fn test_products_template_renders_rows() {
        let template = ProductsIndexTemplate {
            ctx: RequestContext::anonymous("/products"),
            products: vec![ProductView::from(&lettuce())],
        };
        let html = template.render().unwrap();
        assert!(html.contains("Butter lettuce"));
        assert!(html.contains("$12.50"));
    }
}
