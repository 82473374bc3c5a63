use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub updated_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Billing period: a count plus a unit word ("week", "month", ...).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ServicePeriod {
    pub id: Uuid,
    pub period_number: i32,
    pub period_unit: String,
    pub created_by: Uuid,
    pub updated_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Monetary fields are integer cents.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub period_id: Uuid,
    pub category_id: Uuid,
    pub wash_frequency: i32,
    pub washing_folding: i64,
    pub ironing: String,
    pub maximum_kg: i32,
    pub total: i64,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub updated_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Service joined with its period and category for catalog reads.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ServiceDetail {
    pub id: Uuid,
    pub wash_frequency: i32,
    pub washing_folding: i64,
    pub ironing: String,
    pub maximum_kg: i32,
    pub total: i64,
    pub description: Option<String>,
    pub period_id: Uuid,
    pub period_number: i32,
    pub period_unit: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
