use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted subscription. `amount` is copied from the service total at
/// creation time so later price changes do not affect existing records.
/// `revision` is bumped on every update and backs the optimistic
/// concurrency check on payment patches.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: i64,
    pub wash_frequency_total: i32,
    pub wash_frequency_used: i32,
    pub wash_frequency_left: i32,
    pub payment_status: String,
    pub payment_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub admin_processor: Option<Uuid>,
    pub is_active: bool,
    pub revision: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
