use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::catalog::{CategoryWrite, PeriodWrite, ServiceWrite},
    models::catalog::{Service, ServiceCategory, ServiceDetail, ServicePeriod},
};

// === CATEGORIES ===

pub async fn list_categories<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<ServiceCategory>> {
    sqlx::query_as::<_, ServiceCategory>("SELECT * FROM service_categories ORDER BY name")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_category<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    category_id: Uuid,
) -> Res<Option<ServiceCategory>> {
    sqlx::query_as::<_, ServiceCategory>("SELECT * FROM service_categories WHERE id = $1")
        .bind(category_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_category<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: CategoryWrite,
    created_by: Uuid,
) -> Res<ServiceCategory> {
    sqlx::query_as::<_, ServiceCategory>(
        r#"
        INSERT INTO service_categories (name, description, created_by)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.description)
    .bind(created_by)
    .fetch_one(executor)
    .await
    .map_err(|e| AppError::from_db_unique(e, "Category name already exists"))
}

pub async fn update_category<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    category_id: Uuid,
    data: CategoryWrite,
    updated_by: Uuid,
) -> Res<Option<ServiceCategory>> {
    sqlx::query_as::<_, ServiceCategory>(
        r#"
        UPDATE service_categories
        SET name = $2, description = $3, updated_by = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(category_id)
    .bind(data.name)
    .bind(data.description)
    .bind(updated_by)
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::from_db_unique(e, "Category name already exists"))
}

pub async fn delete_category<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    category_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("DELETE FROM service_categories WHERE id = $1")
        .bind(category_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

// === PERIODS ===

pub async fn list_periods<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<ServicePeriod>> {
    sqlx::query_as::<_, ServicePeriod>("SELECT * FROM service_periods ORDER BY period_number")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_period<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    period_id: Uuid,
) -> Res<Option<ServicePeriod>> {
    sqlx::query_as::<_, ServicePeriod>("SELECT * FROM service_periods WHERE id = $1")
        .bind(period_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_period<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: PeriodWrite,
    created_by: Uuid,
) -> Res<ServicePeriod> {
    sqlx::query_as::<_, ServicePeriod>(
        r#"
        INSERT INTO service_periods (period_number, period_unit, created_by)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.period_number)
    .bind(data.period_unit)
    .bind(created_by)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_period<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    period_id: Uuid,
    data: PeriodWrite,
    updated_by: Uuid,
) -> Res<Option<ServicePeriod>> {
    sqlx::query_as::<_, ServicePeriod>(
        r#"
        UPDATE service_periods
        SET period_number = $2, period_unit = $3, updated_by = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(period_id)
    .bind(data.period_number)
    .bind(data.period_unit)
    .bind(updated_by)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_period<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    period_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("DELETE FROM service_periods WHERE id = $1")
        .bind(period_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

// === SERVICES ===

const SERVICE_DETAIL_QUERY: &str = r#"
    SELECT s.id, s.wash_frequency, s.washing_folding, s.ironing, s.maximum_kg,
           s.total, s.description,
           p.id AS period_id, p.period_number, p.period_unit,
           c.id AS category_id, c.name AS category_name,
           s.created_at, s.updated_at
    FROM services s
    JOIN service_periods p ON p.id = s.period_id
    JOIN service_categories c ON c.id = s.category_id
"#;

pub async fn list_services<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<ServiceDetail>> {
    sqlx::query_as::<_, ServiceDetail>(&format!(
        "{} ORDER BY s.created_at DESC",
        SERVICE_DETAIL_QUERY
    ))
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_service_detail<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    service_id: Uuid,
) -> Res<Option<ServiceDetail>> {
    sqlx::query_as::<_, ServiceDetail>(&format!("{} WHERE s.id = $1", SERVICE_DETAIL_QUERY))
        .bind(service_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_service<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ServiceWrite,
    created_by: Uuid,
) -> Res<Service> {
    sqlx::query_as::<_, Service>(
        r#"
        INSERT INTO services (period_id, category_id, wash_frequency, washing_folding,
                              ironing, maximum_kg, total, description, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(data.period_id)
    .bind(data.category_id)
    .bind(data.wash_frequency)
    .bind(data.washing_folding)
    .bind(data.ironing)
    .bind(data.maximum_kg)
    .bind(data.total)
    .bind(data.description)
    .bind(created_by)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_service<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    service_id: Uuid,
    data: ServiceWrite,
    updated_by: Uuid,
) -> Res<Option<Service>> {
    sqlx::query_as::<_, Service>(
        r#"
        UPDATE services
        SET period_id = $2, category_id = $3, wash_frequency = $4, washing_folding = $5,
            ironing = $6, maximum_kg = $7, total = $8, description = $9,
            updated_by = $10, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(service_id)
    .bind(data.period_id)
    .bind(data.category_id)
    .bind(data.wash_frequency)
    .bind(data.washing_folding)
    .bind(data.ironing)
    .bind(data.maximum_kg)
    .bind(data.total)
    .bind(data.description)
    .bind(updated_by)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_service<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    service_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(service_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
