use chrono::NaiveDateTime;
use uuid::Uuid;

pub struct SubscriptionInsert {
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: i64,
    pub wash_frequency_total: i32,
}

pub struct PaymentPatch {
    pub payment_status: String,
    pub notes: Option<String>,
    pub admin_processor: Uuid,
    /// Set iff the new status is "paid".
    pub payment_date: Option<NaiveDateTime>,
    /// When present, the update only applies if the stored revision still
    /// matches; otherwise the caller gets a conflict.
    pub expected_revision: Option<i32>,
}
