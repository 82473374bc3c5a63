use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::services;

/// Registers a new user with phone number and password authentication.
///
/// # Input
/// - `req`: JSON payload containing signup information (full name, phone
///   number, password, optional email)
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns the created user object with 201 Created status
/// - Error: Returns 400 Bad Request when the payload fails validation or
///   the phone number is already registered
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/api/auth/signup', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     full_name: 'Jane Doe',
///     phone_number: '+2348012345678',
///     password: 'securepassword'
///   })
/// });
///
/// if (response.ok) {
///   const userData = await response.json();
///   console.log('Registered user:', userData);
/// }
/// ```
#[post("/signup")]
async fn post_signup(
    req: web::Json<SignupRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;
    req.validate()?;

    let phone_exists =
        services::user::exists_user_by_phone(pg_pool, req.phone_number.clone()).await?;
    if phone_exists {
        return Err(AppError::Validation(
            "User with this phone number already exists".to_string(),
        ));
    }

    let user = services::user::create_user_with_credentials(pg_pool, &req.into_inner()).await?;
    Ok(Success::created(user))
}

/// Authenticates a user with phone number and password.
///
/// # Input
/// - `login_data`: JSON payload containing phone number and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token and user details
/// - Error: Returns 401 Unauthorized for invalid credentials
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     phone_number: '+2348012345678',
///     password: 'securepassword'
///   })
/// });
///
/// if (response.ok) {
///   const authData = await response.json();
///   // Store token for authenticated requests
///   localStorage.setItem('authToken', authData.token);
///   console.log('Logged in user:', authData.user);
/// }
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: user.role.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse { token, user })
}
