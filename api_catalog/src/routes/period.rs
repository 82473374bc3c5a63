use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::catalog::PeriodRequest;
use crate::services;

/// Lists billing periods, ordered by their count.
#[get("/periods")]
async fn get_periods(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let periods = services::catalog::list_periods(pg_pool).await?;
    Success::ok(periods)
}

/// Creates a billing period: a count of at least 1 plus a unit word
/// (day, days, week, month, year, hour, hours, minute, minutes).
#[post("/periods")]
async fn post_period(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PeriodRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let period =
        services::catalog::create_period(pg_pool, req.into_inner().into_write(), claims.user_id)
            .await?;
    Success::created(period)
}

#[put("/periods/{id}")]
async fn put_period(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<PeriodRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;
    let period = services::catalog::update_period(
        pg_pool,
        path.into_inner(),
        req.into_inner().into_write(),
        claims.user_id,
    )
    .await?;
    Success::ok(period)
}

#[delete("/periods/{id}")]
async fn delete_period(path: web::Path<Uuid>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::catalog::delete_period(pg_pool, path.into_inner()).await?;
    Success::message("Service period deleted successfully")
}
