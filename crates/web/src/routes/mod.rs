//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (database reachable)
//!
//! # Pages
//! GET  /                       - Dashboard: batch statistics + recent movements
//! GET  /movements?limit=N      - Recent movements
//! GET  /products               - Active products
//! GET  /shipments/pending      - Shipments waiting to be received
//! GET  /batches                - Batches with low-stock flags
//! GET  /customers              - Customers
//! GET  /users/{id}             - User detail
//!
//! # JSON API
//! GET  /api/movements?limit=N  - Recent movements
//! GET  /api/products           - Active products
//! GET  /api/shipments/pending  - Pending shipments
//! GET  /api/batches/stats      - Batch statistics
//! ```

pub mod api;
pub mod batches;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod movements;
pub mod products;
pub mod shipments;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application router (pages and JSON API).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(movements::router())
        .merge(products::router())
        .merge(shipments::router())
        .merge(batches::router())
        .merge(customers::router())
        .merge(users::router())
        .merge(api::router())
}
