//! Domain models for AgriQ.
//!
//! Shapes returned by the repositories and handed straight to templates and
//! the JSON API. Relations the pages need are embedded as small `*Ref`
//! structs instead of full records.

pub mod batch;
pub mod movement;
pub mod product;
pub mod session;
pub mod shipment;
pub mod user;

pub use batch::{Batch, BatchWithProduct};
pub use movement::{BatchRef, DiscardRef, Movement, MovementDetail, OrderRef, ShipmentRef};
pub use product::{Product, ProductRef};
pub use session::keys as session_keys;
pub use shipment::{PendingShipment, ShipmentMovement};
pub use user::{Customer, CustomerRef, User, UserRef};
