use actix_web::web::{self};

pub mod routes {
    pub mod category;
    pub mod period;
    pub mod service;
}

mod services {
    pub(crate) mod catalog;
}

mod dtos {
    pub(crate) mod catalog;
}

/// Public catalog reads: anyone can browse services, categories and
/// periods without a token.
pub fn mount_catalog() -> actix_web::Scope {
    web::scope("/catalog")
        .service(routes::service::get_services)
        .service(routes::service::get_service)
        .service(routes::category::get_categories)
        .service(routes::period::get_periods)
}

/// Admin-only catalog writes; mounted behind the admin middleware.
pub fn mount_admin() -> actix_web::Scope {
    web::scope("/catalog")
        .service(routes::service::post_service)
        .service(routes::service::put_service)
        .service(routes::service::delete_service)
        .service(routes::category::post_category)
        .service(routes::category::put_category)
        .service(routes::category::delete_category)
        .service(routes::period::post_period)
        .service(routes::period::put_period)
        .service(routes::period::delete_period)
}
