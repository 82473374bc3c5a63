use chrono::{NaiveDateTime, Utc};
use common::error::{AppError, Res};
use common::misc::PaymentStatus;
use db::dtos::subscription::{PaymentPatch, SubscriptionInsert};
use db::models::catalog::ServiceDetail;
use db::models::subscription::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

use crate::billing;
use crate::dtos::sub::PaymentUpdateRequest;

/// Builds the insert record for a new subscription: the amount is copied
/// from the service total, the wash allowance starts untouched and the
/// end date comes from the service's billing period.
fn assemble_subscription(
    user_id: Uuid,
    service: &ServiceDetail,
    now: NaiveDateTime,
) -> SubscriptionInsert {
    SubscriptionInsert {
        user_id,
        service_id: service.id,
        start_date: now,
        end_date: billing::period_end(now, service.period_number, &service.period_unit),
        amount: service.total,
        wash_frequency_total: service.wash_frequency,
    }
}

/// Payment date accompanies exactly the "paid" status; the store keeps
/// any earlier date when the patch carries none.
fn payment_date_for(status: PaymentStatus, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match status {
        PaymentStatus::Paid => Some(now),
        _ => None,
    }
}

pub async fn create_subscription(
    pool: &PgPool,
    user_id: Uuid,
    service_id: Uuid,
) -> Res<Subscription> {
    let user = db::user::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.onboarding_completed {
        return Err(AppError::Validation(
            "Please complete onboarding before subscribing".to_string(),
        ));
    }

    let service = db::catalog::get_service_detail(pool, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    let insert = assemble_subscription(user_id, &service, Utc::now().naive_utc());
    let subscription = db::subscription::insert_subscription(pool, insert).await?;
    log::info!(
        "user {} subscribed to service {} until {}",
        user_id,
        service_id,
        subscription.end_date
    );
    Ok(subscription)
}

/// Admins see every subscription, everyone else only their own.
pub async fn list_subscriptions(
    pool: &PgPool,
    user_id: Uuid,
    is_admin: bool,
) -> Res<Vec<Subscription>> {
    if is_admin {
        db::subscription::list_subscriptions(pool).await
    } else {
        db::subscription::list_subscriptions_by_user(pool, user_id).await
    }
}

pub async fn get_subscription_authorized(
    pool: &PgPool,
    subscription_id: Uuid,
    user_id: Uuid,
    is_admin: bool,
) -> Res<Subscription> {
    let subscription = db::subscription::get_subscription(pool, subscription_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

    if !is_admin && subscription.user_id != user_id {
        return Err(AppError::Unauthorized(
            "Not allowed to view this subscription".to_string(),
        ));
    }
    Ok(subscription)
}

pub async fn update_payment_status(
    pool: &PgPool,
    subscription_id: Uuid,
    admin_id: Uuid,
    req: PaymentUpdateRequest,
) -> Res<Subscription> {
    let status = PaymentStatus::parse(&req.payment_status)?;

    db::subscription::get_subscription(pool, subscription_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

    let patch = PaymentPatch {
        payment_status: status.as_str().to_string(),
        notes: req.notes,
        admin_processor: admin_id,
        payment_date: payment_date_for(status, Utc::now().naive_utc()),
        expected_revision: req.expected_revision,
    };
    let had_revision_guard = patch.expected_revision.is_some();

    match db::subscription::update_payment(pool, subscription_id, patch).await? {
        Some(subscription) => {
            log::info!(
                "admin {} set subscription {} payment status to {}",
                admin_id,
                subscription_id,
                subscription.payment_status
            );
            Ok(subscription)
        }
        None if had_revision_guard => Err(AppError::Conflict(
            "Subscription was modified by another request".to_string(),
        )),
        None => Err(AppError::NotFound("Subscription not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn sample_service(wash_frequency: i32, period_number: i32, period_unit: &str) -> ServiceDetail {
        let now = Utc::now().naive_utc();
        ServiceDetail {
            id: Uuid::new_v4(),
            wash_frequency,
            washing_folding: 1500,
            ironing: "N/A".to_string(),
            maximum_kg: 10,
            total: 6000,
            description: None,
            period_id: Uuid::new_v4(),
            period_number,
            period_unit: period_unit.to_string(),
            category_id: Uuid::new_v4(),
            category_name: "Premium Wash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_subscription_copies_amount_and_full_wash_allowance() {
        let service = sample_service(4, 1, "month");
        let now = at(2024, 3, 10);
        let insert = assemble_subscription(Uuid::new_v4(), &service, now);

        assert_eq!(insert.amount, service.total);
        assert_eq!(insert.wash_frequency_total, 4);
        assert_eq!(insert.start_date, now);
        assert_eq!(insert.end_date, at(2024, 4, 10));
    }

    #[test]
    fn weekly_subscription_ends_seven_n_days_later() {
        let service = sample_service(2, 3, "week");
        let now = at(2024, 3, 10);
        let insert = assemble_subscription(Uuid::new_v4(), &service, now);
        assert_eq!(insert.end_date, now + Duration::days(21));
    }

    #[test]
    fn month_end_start_clamps_into_february() {
        let service = sample_service(4, 1, "month");
        let insert = assemble_subscription(Uuid::new_v4(), &service, at(2024, 1, 31));
        assert_eq!(insert.end_date, at(2024, 2, 29));
    }

    #[test]
    fn end_date_is_always_after_start_date() {
        for unit in ["day", "week", "month", "year", "hour", "minute", "bogus"] {
            let service = sample_service(1, 1, unit);
            let now = Utc::now().naive_utc();
            let insert = assemble_subscription(Uuid::new_v4(), &service, now);
            assert!(insert.end_date > insert.start_date, "unit {}", unit);
        }
    }

    #[test]
    fn only_paid_status_carries_a_payment_date() {
        let now = Utc::now().naive_utc();
        assert_eq!(payment_date_for(PaymentStatus::Paid, now), Some(now));
        assert_eq!(payment_date_for(PaymentStatus::Pending, now), None);
        assert_eq!(payment_date_for(PaymentStatus::Failed, now), None);
        assert_eq!(payment_date_for(PaymentStatus::Refunded, now), None);
    }
}
