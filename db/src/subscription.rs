use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::subscription::{PaymentPatch, SubscriptionInsert},
    models::subscription::Subscription,
};

pub async fn insert_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: SubscriptionInsert,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (user_id, service_id, start_date, end_date, amount,
                                   wash_frequency_total, wash_frequency_used, wash_frequency_left)
        VALUES ($1, $2, $3, $4, $5, $6, 0, $6)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.service_id)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(data.amount)
    .bind(data.wash_frequency_total)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_subscriptions<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions ORDER BY created_at DESC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list_subscriptions_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    subscription_id: Uuid,
) -> Res<Option<Subscription>> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
        .bind(subscription_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Applies an admin payment patch. `payment_date` and `notes` only
/// overwrite the stored values when the patch carries them; updates bump
/// the revision and,
/// when `expected_revision` is present, only apply against that revision.
/// Returns `None` when no row matched.
pub async fn update_payment<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    subscription_id: Uuid,
    patch: PaymentPatch,
) -> Res<Option<Subscription>> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET payment_status = $2,
            notes = COALESCE($3, notes),
            admin_processor = $4,
            payment_date = COALESCE($5, payment_date),
            revision = revision + 1,
            updated_at = now()
        WHERE id = $1 AND ($6::integer IS NULL OR revision = $6)
        RETURNING *
        "#,
    )
    .bind(subscription_id)
    .bind(patch.payment_status)
    .bind(patch.notes)
    .bind(patch.admin_processor)
    .bind(patch.payment_date)
    .bind(patch.expected_revision)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
