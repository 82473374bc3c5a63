use actix_web::web::{self};

use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}

pub mod routes {
    pub mod auth;
    pub mod user;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
}

/// Requires a valid bearer token; rejects everything else with 401.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::authenticated()
}

/// Requires a valid bearer token whose claims carry the admin role.
pub fn admin_middleware() -> AuthMiddleware {
    AuthMiddleware::admin_only()
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_signup)
        .service(routes::auth::post_login)
}

pub fn mount_user() -> actix_web::Scope {
    web::scope("/user")
        .service(routes::user::get_me)
        .service(routes::user::post_onboarding)
        .service(routes::user::put_profile)
}
