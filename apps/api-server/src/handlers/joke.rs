//! `GET /` - a random one-liner.

use actix_web::HttpResponse;
use rand::seq::SliceRandom;

pub const JOKES: [&str; 10] = [
    "Why do Gophers hate the airport? Too many Go delays!",
    "My Go program doesn’t work. Turns out it was a case of `nil` pointer exception.",
    "What’s a gopher’s favorite snack? Go-rnuts.",
    "In Go, what do you call a bad day at work? A panic!",
    "I asked my Gopher friend how they handle errors. They said, 'We just return them!'",
    "Why don’t Gophers play hide and seek? They’d never `defer` finding you.",
    "What’s a Go developer’s favorite band? Garbage Collection!",
    "Why do Gophers always win arguments? Because they know how to channel their anger!",
    "In Go, there are no strings attached… except when you forget to `fmt.Println()` them.",
    "Why was the Gopher sad? It couldn’t find its closure!",
];

/// Pick one of the fixed jokes.
pub fn random() -> &'static str {
    JOKES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(JOKES[0])
}

/// Plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "A random joke", body = String, content_type = "text/plain"))
)]
pub async fn random_joke() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(random())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use super::*;
    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn test_root_returns_a_known_joke() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(JOKES.contains(&text));
    }
}
