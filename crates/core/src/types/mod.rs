//! Core types for AgriQ.
//!
//! Type-safe wrappers for the inventory domain.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::Price;
pub use status::*;
