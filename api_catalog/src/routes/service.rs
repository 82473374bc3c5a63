use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::catalog::ServiceRequest;
use crate::services;

/// Lists all service offerings joined with their period and category,
/// newest first.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/catalog/services');
///
/// if (response.ok) {
///   const services = await response.json();
///   // Example entry:
///   // {
///   //   id: "a1b2c3d4-...",
///   //   wash_frequency: 4,
///   //   washing_folding: 1500,
///   //   ironing: "N/A",
///   //   maximum_kg: 10,
///   //   total: 6000, // in cents
///   //   period_number: 1,
///   //   period_unit: "month",
///   //   category_name: "Premium Wash",
///   //   ...
///   // }
/// }
/// ```
#[get("/services")]
async fn get_services(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let all = services::catalog::list_services(pg_pool).await?;
    Success::ok(all)
}

/// Fetches a single service with its period and category.
#[get("/services/{id}")]
async fn get_service(path: web::Path<Uuid>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let service = services::catalog::get_service(pg_pool, path.into_inner()).await?;
    Success::ok(service)
}

/// Creates a service offering. The referenced period and category must
/// exist; prices are integer cents.
#[post("/services")]
async fn post_service(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ServiceRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let service =
        services::catalog::create_service(pg_pool, req.into_inner().into_write(), claims.user_id)
            .await?;
    Success::created(service)
}

#[put("/services/{id}")]
async fn put_service(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<ServiceRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let service = services::catalog::update_service(
        pg_pool,
        path.into_inner(),
        req.into_inner().into_write(),
        claims.user_id,
    )
    .await?;
    Success::ok(service)
}

#[delete("/services/{id}")]
async fn delete_service(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::catalog::delete_service(pg_pool, path.into_inner()).await?;
    Success::message("Service deleted successfully")
}
