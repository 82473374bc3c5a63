use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use common::error::{AppError, Res};
use db::dtos::user::{AddressUpdateRequest, DeliveryAddress, UserCreateRequest};
use db::models::user::{AuthCredentials, User};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::{AddressRequest, SignupRequest};

pub async fn exists_user_by_phone(pool: &PgPool, phone_number: String) -> Res<bool> {
    db::user::exists_user_by_phone(pool, phone_number).await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Inserts user record and hashed credentials in one transaction.
pub async fn create_user_with_credentials(pool: &PgPool, req: &SignupRequest) -> Res<User> {
    let mut tx = pool.begin().await?;

    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            full_name: req.full_name.trim().to_string(),
            phone_number: req.phone_number.trim().to_string(),
            email: req.email.clone(),
        },
    )
    .await?;

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    db::user::insert_user_with_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;
    log::info!("new user registered: {}", user.id);
    Ok(user)
}

/// Stores the delivery address collected during onboarding or a later
/// profile edit.
pub async fn update_address(
    pool: &PgPool,
    user_id: Uuid,
    req: &AddressRequest,
    complete_onboarding: bool,
) -> Res<User> {
    db::user::update_delivery_address(
        pool,
        AddressUpdateRequest {
            user_id,
            address: DeliveryAddress {
                street: req.street.clone(),
                city: req.city.clone(),
                state: req.state.clone(),
                zip_code: req.zip_code.clone(),
                country: req.country.clone(),
                additional_info: req.additional_info.clone(),
            },
            complete_onboarding,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
