use std::sync::Arc;

use actix_web::{Responder, get, patch, post, web};
use common::{
    error::{AppError, Res},
    http::Success,
    jwt::JwtClaims,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::sub::{PaymentUpdateRequest, SubscriptionCreateRequest};
use crate::services;

/// Lists subscriptions: admins get every record, other users only their
/// own.
#[get("")]
async fn get_subscriptions(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let subscriptions =
        services::sub::list_subscriptions(pg_pool, claims.user_id, claims.is_admin()).await?;
    Success::ok(subscriptions)
}

/// Subscribes the authenticated user to a service.
///
/// The caller must have completed onboarding. The new record copies the
/// service's total as its amount, starts the wash allowance at the
/// service's wash frequency and derives the end date from the service's
/// billing period. Payment starts out pending.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/subscriptions', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     service_id: 'a1b2c3d4-...' // From the catalog endpoint
///   })
/// });
///
/// if (response.ok) {
///   const subscription = await response.json();
///   console.log('Subscribed until', subscription.end_date);
/// }
/// ```
#[post("")]
async fn post_subscribe(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<SubscriptionCreateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let subscription =
        services::sub::create_subscription(pg_pool, claims.user_id, req.service_id).await?;
    Success::created(subscription)
}

/// Fetches a single subscription; only its owner or an admin may view it.
#[get("/{id}")]
async fn get_subscription(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let subscription = services::sub::get_subscription_authorized(
        pg_pool,
        path.into_inner(),
        claims.user_id,
        claims.is_admin(),
    )
    .await?;
    Success::ok(subscription)
}

/// Admin-only payment update: sets the payment status and notes, records
/// the processing admin, and stamps the payment date when the status
/// becomes "paid".
#[patch("/{id}")]
async fn patch_payment(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<PaymentUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    if !claims.is_admin() {
        return Err(AppError::Unauthorized("Admin access required".to_string()));
    }

    let pg_pool: &PgPool = &**pool;
    let subscription = services::sub::update_payment_status(
        pg_pool,
        path.into_inner(),
        claims.user_id,
        req.into_inner(),
    )
    .await?;
    Success::ok(subscription)
}
