//! Status and classification enums.
//!
//! Each enum maps to a Postgres enum type in the `agriq` schema and uses the
//! same SCREAMING_SNAKE_CASE spelling on the wire as in the database.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an enum from its database spelling fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

impl ParseStatusError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Lifecycle status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "agriq.shipment_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    /// Dispatched, waiting to be received at destination.
    #[default]
    Pending,
    /// Received and counted at destination.
    Received,
    Cancelled,
}

impl ShipmentStatus {
    /// Database spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Received => "RECEIVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Human readable label for pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Received => "Received",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "RECEIVED" => Ok(Self::Received),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError::new("shipment status", s)),
        }
    }
}

/// Kind of inventory movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "agriq.movement_type", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Stock sent from the deposit to the market.
    Shipment,
    /// Stock sold to a customer order.
    Sale,
    /// Stock written off.
    Discard,
    /// Manual correction of counters.
    Adjustment,
}

impl MovementType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipment => "SHIPMENT",
            Self::Sale => "SALE",
            Self::Discard => "DISCARD",
            Self::Adjustment => "ADJUSTMENT",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shipment => "Shipment",
            Self::Sale => "Sale",
            Self::Discard => "Discard",
            Self::Adjustment => "Adjustment",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHIPMENT" => Ok(Self::Shipment),
            "SALE" => Ok(Self::Sale),
            "DISCARD" => Ok(Self::Discard),
            "ADJUSTMENT" => Ok(Self::Adjustment),
            _ => Err(ParseStatusError::new("movement type", s)),
        }
    }
}

/// Tax classification of a customer, used for invoicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "agriq.fiscal_condition", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiscalCondition {
    /// Registered VAT taxpayer.
    Responsible,
    /// Simplified small-taxpayer regime.
    Monotax,
    #[default]
    FinalConsumer,
    Exempt,
}

impl FiscalCondition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Responsible => "RESPONSIBLE",
            Self::Monotax => "MONOTAX",
            Self::FinalConsumer => "FINAL_CONSUMER",
            Self::Exempt => "EXEMPT",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Responsible => "Registered taxpayer",
            Self::Monotax => "Monotax",
            Self::FinalConsumer => "Final consumer",
            Self::Exempt => "Exempt",
        }
    }
}

impl fmt::Display for FiscalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FiscalCondition {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESPONSIBLE" => Ok(Self::Responsible),
            "MONOTAX" => Ok(Self::Monotax),
            "FINAL_CONSUMER" => Ok(Self::FinalConsumer),
            "EXEMPT" => Ok(Self::Exempt),
            _ => Err(ParseStatusError::new("fiscal condition", s)),
        }
    }
}

/// Permission level of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "agriq.user_role", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full access, including user management.
    Admin,
    /// Records movements and receives shipments.
    Operator,
    /// Read-only access.
    Viewer,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Operator => "OPERATOR",
            Self::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "OPERATOR" => Ok(Self::Operator),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(ParseStatusError::new("user role", s)),
        }
    }
}
