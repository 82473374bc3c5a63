use common::error::{AppError, Res};
use db::dtos::catalog::{CategoryWrite, PeriodWrite, ServiceWrite};
use db::models::catalog::{Service, ServiceCategory, ServiceDetail, ServicePeriod};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list_categories(pool: &PgPool) -> Res<Vec<ServiceCategory>> {
    db::catalog::list_categories(pool).await
}

pub async fn create_category(
    pool: &PgPool,
    data: CategoryWrite,
    created_by: Uuid,
) -> Res<ServiceCategory> {
    let category = db::catalog::insert_category(pool, data, created_by).await?;
    log::info!("admin {} created category {}", created_by, category.id);
    Ok(category)
}

pub async fn update_category(
    pool: &PgPool,
    category_id: Uuid,
    data: CategoryWrite,
    updated_by: Uuid,
) -> Res<ServiceCategory> {
    db::catalog::update_category(pool, category_id, data, updated_by)
        .await?
        .ok_or_else(|| AppError::NotFound("Service category not found".to_string()))
}

pub async fn delete_category(pool: &PgPool, category_id: Uuid) -> Res<()> {
    if db::catalog::delete_category(pool, category_id).await? {
        log::info!("category {} deleted", category_id);
        Ok(())
    } else {
        Err(AppError::NotFound("Service category not found".to_string()))
    }
}

pub async fn list_periods(pool: &PgPool) -> Res<Vec<ServicePeriod>> {
    db::catalog::list_periods(pool).await
}

pub async fn create_period(
    pool: &PgPool,
    data: PeriodWrite,
    created_by: Uuid,
) -> Res<ServicePeriod> {
    let period = db::catalog::insert_period(pool, data, created_by).await?;
    log::info!("admin {} created period {}", created_by, period.id);
    Ok(period)
}

pub async fn update_period(
    pool: &PgPool,
    period_id: Uuid,
    data: PeriodWrite,
    updated_by: Uuid,
) -> Res<ServicePeriod> {
    db::catalog::update_period(pool, period_id, data, updated_by)
        .await?
        .ok_or_else(|| AppError::NotFound("Service period not found".to_string()))
}

pub async fn delete_period(pool: &PgPool, period_id: Uuid) -> Res<()> {
    if db::catalog::delete_period(pool, period_id).await? {
        log::info!("period {} deleted", period_id);
        Ok(())
    } else {
        Err(AppError::NotFound("Service period not found".to_string()))
    }
}

pub async fn list_services(pool: &PgPool) -> Res<Vec<ServiceDetail>> {
    db::catalog::list_services(pool).await
}

pub async fn get_service(pool: &PgPool, service_id: Uuid) -> Res<ServiceDetail> {
    db::catalog::get_service_detail(pool, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
}

/// Creating or updating a service verifies both referenced catalog rows
/// first so a bad reference surfaces as 404 rather than a raw database
/// error.
async fn check_references(pool: &PgPool, data: &ServiceWrite) -> Res<()> {
    if db::catalog::get_period(pool, data.period_id).await?.is_none() {
        return Err(AppError::NotFound("Service period not found".to_string()));
    }
    if db::catalog::get_category(pool, data.category_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Service category not found".to_string()));
    }
    Ok(())
}

pub async fn create_service(pool: &PgPool, data: ServiceWrite, created_by: Uuid) -> Res<Service> {
    check_references(pool, &data).await?;
    let service = db::catalog::insert_service(pool, data, created_by).await?;
    log::info!("admin {} created service {}", created_by, service.id);
    Ok(service)
}

pub async fn update_service(
    pool: &PgPool,
    service_id: Uuid,
    data: ServiceWrite,
    updated_by: Uuid,
) -> Res<Service> {
    check_references(pool, &data).await?;
    db::catalog::update_service(pool, service_id, data, updated_by)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
}

pub async fn delete_service(pool: &PgPool, service_id: Uuid) -> Res<()> {
    if db::catalog::delete_service(pool, service_id).await? {
        log::info!("service {} deleted", service_id);
        Ok(())
    } else {
        Err(AppError::NotFound("Service not found".to_string()))
    }
}
