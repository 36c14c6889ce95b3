//! Health check endpoint.

use actix_web::HttpResponse;

/// Liveness probe - 200 with an empty body.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "meta",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn test_healthz_is_empty_ok() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }
}
