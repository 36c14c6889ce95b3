//! HTTP handlers and route configuration.

pub mod health;
pub mod joke;
pub mod posts;

use actix_web::{HttpResponse, web};
use pgo_shared::ErrorResponse;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Bodies are decoded as JSON whatever their Content-Type says
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Public routes
        .route("/", web::get().to(joke::random_joke))
        .route("/healthz", web::get().to(health::healthz))
        // Post routes
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create_post))
                .route("", web::get().to(posts::list_posts))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::patch().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
