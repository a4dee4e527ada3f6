//! User and customer domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use agriq_core::{CustomerId, FiscalCondition, UserId, UserRole};

/// An application user who records movements.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// User fields embedded in movement views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}

/// A customer that places orders.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Tax identification number.
    pub tax_id: String,
    pub fiscal_condition: FiscalCondition,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Customer fields embedded in movement views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
    pub fiscal_condition: FiscalCondition,
}
