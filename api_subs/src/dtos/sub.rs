use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionCreateRequest {
    pub service_id: Uuid,
}

/// Admin patch for a subscription's payment state. Any status may be set
/// from any other status; `expected_revision` opts into an optimistic
/// concurrency check.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentUpdateRequest {
    pub payment_status: String,
    pub notes: Option<String>,
    pub expected_revision: Option<i32>,
}
