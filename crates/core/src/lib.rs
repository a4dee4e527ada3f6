//! AgriQ Core - Shared types library.
//!
//! This crate provides the types shared by every AgriQ component:
//! - `web` - Server-rendered inventory application
//! - `cli` - Command-line tools for migrations, seeding and statistics
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access. Enabling the `postgres` feature derives the `sqlx` encodings so the
//! same types can be bound and decoded directly by the web crate.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, status enums and prices
//! - [`stock`] - Batch quantity counters, the low-stock policy and inventory summaries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod stock;
pub mod types;

pub use stock::*;
pub use types::*;
