//! CORS policy.

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::observability::REQUEST_ID_HEADER;

/// Build the CORS middleware.
///
/// An empty origin list allows every origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allowed_header(REQUEST_ID_HEADER)
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(3600);

    if allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
