use crate::error::{AppError, Res};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Res<Self> {
        match value {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(AppError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

/// Payment status of a subscription. Transitions are admin-only and
/// deliberately unrestricted: any status may move to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Res<Self> {
        match value {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(AppError::Validation(format!(
                "Unknown payment status: {}",
                other
            ))),
        }
    }
}

/// Words accepted for a billing period unit. Periods stored in the catalog
/// must use one of these; the billing resolver itself tolerates anything
/// and falls back to 30 days for unknown words.
pub const PERIOD_UNITS: [&str; 9] = [
    "day", "days", "week", "month", "year", "hour", "hours", "minute", "minutes",
];

pub fn validate_period_unit(value: &str) -> Res<()> {
    if PERIOD_UNITS.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unknown period unit: {}",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_parses_all_four_values() {
        for value in ["pending", "paid", "failed", "refunded"] {
            assert_eq!(PaymentStatus::parse(value).unwrap().as_str(), value);
        }
    }

    #[test]
    fn payment_status_rejects_unknown_values() {
        assert!(PaymentStatus::parse("cancelled").is_err());
        assert!(PaymentStatus::parse("").is_err());
    }

    #[test]
    fn period_unit_accepts_only_listed_words() {
        for unit in PERIOD_UNITS {
            assert!(validate_period_unit(unit).is_ok());
        }
        assert!(validate_period_unit("fortnight").is_err());
        assert!(validate_period_unit("weeks").is_err());
    }
}
