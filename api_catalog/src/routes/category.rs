use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::catalog::CategoryRequest;
use crate::services;

/// Lists every service category, ordered by name.
#[get("/categories")]
async fn get_categories(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let categories = services::catalog::list_categories(pg_pool).await?;
    Success::ok(categories)
}

/// Creates a service category. Category names are unique; a duplicate
/// name comes back as 409 Conflict.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/admin/catalog/categories', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     name: 'Premium Wash',
///     description: 'Full service with delivery' // Optional
///   })
/// });
/// ```
#[post("/categories")]
async fn post_category(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CategoryRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let category =
        services::catalog::create_category(pg_pool, req.into_inner().into_write(), claims.user_id)
            .await?;
    Success::created(category)
}

#[put("/categories/{id}")]
async fn put_category(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<CategoryRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let category = services::catalog::update_category(
        pg_pool,
        path.into_inner(),
        req.into_inner().into_write(),
        claims.user_id,
    )
    .await?;
    Success::ok(category)
}

#[delete("/categories/{id}")]
async fn delete_category(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::catalog::delete_category(pg_pool, path.into_inner()).await?;
    Success::message("Service category deleted successfully")
}
