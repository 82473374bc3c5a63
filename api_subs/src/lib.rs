use actix_web::web::{self};

pub mod billing;

pub mod routes {
    pub mod sub;
}

mod services {
    pub(crate) mod sub;
}

mod dtos {
    pub(crate) mod sub;
}

pub fn mount_subs() -> actix_web::Scope {
    web::scope("/subscriptions")
        .service(routes::sub::get_subscriptions)
        .service(routes::sub::post_subscribe)
        .service(routes::sub::get_subscription)
        .service(routes::sub::patch_payment)
}
