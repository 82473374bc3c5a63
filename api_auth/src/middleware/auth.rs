use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::{Ready, ok};

use common::jwt::get_jwt_claims_or_error;

/// Guard for scopes behind authentication. The extractor middleware has
/// already validated the token; this one turns a missing or invalid result
/// into a 401 and optionally requires the admin role.
pub struct AuthMiddleware {
    require_admin: bool,
}

impl AuthMiddleware {
    pub fn authenticated() -> Self {
        AuthMiddleware {
            require_admin: false,
        }
    }

    pub fn admin_only() -> Self {
        AuthMiddleware {
            require_admin: true,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
            require_admin: self.require_admin,
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
    require_admin: bool,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let require_admin = self.require_admin;
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let claims = match get_jwt_claims_or_error(&req) {
                Ok(claims) => claims,
                Err(response) => {
                    return Ok(req.into_response(response.map_into_boxed_body()));
                }
            };

            if require_admin && !claims.is_admin() {
                let response = HttpResponse::Unauthorized()
                    .json(serde_json::json!({ "error": "Admin access required" }))
                    .map_into_boxed_body();
                return Ok(req.into_response(response));
            }

            // make claims available to handlers via ReqData
            req.extensions_mut().insert(claims);
            srv.call(req).await.map(|res| res.map_into_boxed_body())
        })
    }
}
