use std::sync::Arc;

use actix_web::{Responder, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::dtos::auth::AddressRequest;
use crate::services;

/// Endpoint to retrieve the current authenticated user's information.
///
/// # Input
/// - `claims`: The JWT claims extracted from the authentication token
/// - `pool`: A database connection pool for retrieving user data
///
/// # Output
/// - Success: Returns a JSON object with the user's profile information
/// - Error: Returns 401 Unauthorized without a valid token, 404 Not Found
///   if the user record no longer exists
#[get("/me")]
async fn get_me(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;
    let user = services::user::get_user_by_id(pg_pool, claims.user_id).await?;
    Success::ok(user)
}

/// One-time onboarding step: stores the delivery address and marks the
/// user as onboarded. Subscribing is blocked until this has happened.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/user/onboarding', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     street: '12 Marina Road',
///     city: 'Lagos',
///     state: 'Lagos',
///     zip_code: '100001',
///     country: 'Nigeria',
///     additional_info: 'Gate code 4421' // Optional
///   })
/// });
/// ```
#[post("/onboarding")]
async fn post_onboarding(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<AddressRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    services::user::update_address(pg_pool, claims.user_id, &req.into_inner(), true).await?;
    Success::ok(serde_json::json!({
        "message": "Onboarding completed successfully",
        "onboarding_completed": true,
    }))
}

/// Updates the delivery address without touching the onboarding flag.
#[put("/profile")]
async fn put_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<AddressRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    services::user::update_address(pg_pool, claims.user_id, &req.into_inner(), false).await?;
    Success::message("Profile updated successfully")
}
