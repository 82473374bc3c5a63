//! Bearer-token extraction. Runs on every request and leaves the
//! validation result in request extensions for the auth guards.

use middleware::extractor::ExtractionMiddleware;

pub mod middleware {
    pub mod extractor;
}

pub fn middleware() -> ExtractionMiddleware {
    ExtractionMiddleware::new()
}
