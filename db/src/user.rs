use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::user::{AddressUpdateRequest, UserCreateRequest},
    models::user::{AuthCredentials, User},
};

const USER_COLUMNS: &str = "id, full_name, phone_number, email, role, street, city, state, \
     zip_code, country, additional_info, onboarding_completed, created_at, updated_at";

pub async fn exists_user_by_phone<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    phone_number: String,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE phone_number = $1)")
        .bind(phone_number)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(user_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (full_name, phone_number, email)
        VALUES ($1, $2, $3)
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(data.full_name)
    .bind(data.phone_number)
    .bind(data.email)
    .fetch_one(executor)
    .await
    .map_err(|e| AppError::from_db_unique(e, "User with this phone number already exists"))
}

pub async fn insert_user_with_credentials<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: AuthCredentials,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO auth_credentials (user_id, password_hash)
        VALUES ($1, $2)
        "#,
    )
    .bind(data.user_id)
    .bind(data.password_hash)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn get_user_with_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    phone_number: String,
) -> Res<Option<(User, AuthCredentials)>> {
    let row: Option<UserWithHash> = sqlx::query_as(&format!(
        r#"
        SELECT {}, ac.password_hash
        FROM users u
        JOIN auth_credentials ac ON u.id = ac.user_id
        WHERE u.phone_number = $1
        "#,
        USER_COLUMNS
            .split(", ")
            .map(|c| format!("u.{}", c))
            .collect::<Vec<_>>()
            .join(", ")
    ))
    .bind(phone_number)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)?;

    Ok(row.map(|record| {
        let credentials = AuthCredentials {
            user_id: record.user.id,
            password_hash: record.password_hash,
        };
        (record.user, credentials)
    }))
}

#[derive(sqlx::FromRow)]
struct UserWithHash {
    #[sqlx(flatten)]
    user: User,
    password_hash: String,
}

/// Updates the delivery address; onboarding additionally flips the
/// completed flag while profile edits leave it as is.
pub async fn update_delivery_address<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: AddressUpdateRequest,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET street = $2, city = $3, state = $4, zip_code = $5, country = $6,
            additional_info = $7,
            onboarding_completed = onboarding_completed OR $8,
            updated_at = now()
        WHERE id = $1
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(data.user_id)
    .bind(data.address.street)
    .bind(data.address.city)
    .bind(data.address.state)
    .bind(data.address.zip_code)
    .bind(data.address.country)
    .bind(data.address.additional_info)
    .bind(data.complete_onboarding)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
