//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use pgo_core::domain::{NewPost, PageMeta, PageRequest, Post, PostPatch};
use pgo_shared::dto::{
    CreatePostRequest, ListPostsQuery, PaginationMeta, PostListData, PostResponse,
    UpdatePostRequest,
};
use pgo_shared::response::{PostEnvelope, PostListEnvelope};
use pgo_shared::{ApiResponse, MessageResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        created_at: post.created_at,
        updated_at: post.updated_at,
        deleted_at: post.deleted_at,
        title: post.title,
        body: post.body,
    }
}

fn to_meta(meta: PageMeta) -> PaginationMeta {
    PaginationMeta {
        current_page: meta.current_page,
        total_pages: meta.total_pages,
        total_count: meta.total_count,
        limit: meta.limit,
    }
}

/// Create a post.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Malformed body or empty field", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create_post(NewPost::new(req.title, req.body))
        .await?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// List posts, one page at a time.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Page of posts", body = PostListEnvelope),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 404, description = "Page not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let request = PageRequest::new(query.limit, query.page)?;

    let page = state.posts.list_posts(request).await?;

    let data = PostListData {
        posts: page.items.into_iter().map(to_response).collect(),
        meta: to_meta(page.meta),
    };
    let envelope: PostListEnvelope = ApiResponse::ok("posts fetched", data);
    Ok(HttpResponse::Ok().json(envelope))
}

/// Fetch one post.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostEnvelope),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path).await?;

    let envelope: PostEnvelope = ApiResponse::ok("Got it", to_response(post));
    Ok(HttpResponse::Ok().json(envelope))
}

/// Update the title and/or body of a post.
#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = MessageResponse),
        (status = 400, description = "Malformed body or empty field", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        body: req.body,
    };

    let post = state.posts.update_post(&path, patch).await?;

    tracing::info!(post_id = post.id, "Post updated");
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Post updated successfully")))
}

/// Soft-delete a post.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post(&path).await?;

    tracing::info!(post_id = path.as_str(), "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Post deleted")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use pgo_core::ports::PostRepository;
    use pgo_infra::InMemoryPostRepository;

    use super::*;
    use crate::handlers::configure_routes;

    macro_rules! test_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::with_repository($repo.clone())))
                    .configure(configure_routes),
            )
            .await
        };
    }

    async fn seed(repo: &InMemoryPostRepository, n: usize) {
        for i in 0..n {
            repo.create(NewPost::new(format!("title {i}"), format!("body {i}")))
                .await
                .unwrap();
        }
    }

    #[actix_web::test]
    async fn test_create_post() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(repo);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "Hello", "body": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: PostResponse = test::read_body_json(resp).await;
        assert!(post.id > 0);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "World");
        assert!(post.deleted_at.is_none());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[actix_web::test]
    async fn test_create_malformed_body_creates_nothing() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(repo);

        let payloads = [
            r#"{"title": "Hello""#,
            r#"{"title": "Hello"}"#,
            r#"{"title": 5, "body": "x"}"#,
        ];
        for payload in payloads {
            let req = test::TestRequest::post()
                .uri("/posts")
                .insert_header(ContentType::json())
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], true);
            assert_eq!(body["msg"], "Bad request, check your body json");
        }

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_create_accepts_json_without_json_content_type() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(repo);

        let form = test::TestRequest::post()
            .uri("/posts")
            .insert_header(ContentType::form_url_encoded())
            .set_payload(r#"{"title":"Hello","body":"World"}"#)
            .to_request();
        let resp = test::call_service(&app, form).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let bare = test::TestRequest::post()
            .uri("/posts")
            .set_payload(r#"{"title":"Again","body":"World"}"#)
            .to_request();
        let resp = test::call_service(&app, bare).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_create_empty_title_is_bad_request() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(repo);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "", "body": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_list_empty_table_is_not_found() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(repo);

        let req = test::TestRequest::get()
            .uri("/posts?limit=10&page=1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": true, "msg": "Page not found"}));
    }

    #[actix_web::test]
    async fn test_list_pagination() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 25).await;
        let app = test_app!(repo);

        let req = test::TestRequest::get()
            .uri("/posts?limit=20&page=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], false);
        assert_eq!(body["msg"], "posts fetched");
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 20);
        assert_eq!(
            body["data"]["meta"],
            json!({"current_page": 1, "total_pages": 2, "total_count": 25, "limit": 20})
        );

        let req = test::TestRequest::get()
            .uri("/posts?limit=20&page=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 5);
        assert_eq!(posts[0]["id"], 21);

        let req = test::TestRequest::get()
            .uri("/posts?limit=20&page=3")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_defaults_and_clamp() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 25).await;
        let app = test_app!(repo);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"]["meta"]["limit"], 10);
        assert_eq!(body["data"]["meta"]["total_pages"], 3);

        let req = test::TestRequest::get().uri("/posts?limit=50").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 20);
        assert_eq!(body["data"]["meta"]["limit"], 20);
    }

    #[actix_web::test]
    async fn test_list_rejects_bad_query() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 3).await;
        let app = test_app!(repo);

        let uris = [
            "/posts?limit=abc",
            "/posts?page=-1",
            "/posts?limit=0",
            "/posts?page=0",
        ];
        for uri in uris {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_get_post() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 1).await;
        let app = test_app!(repo);

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], false);
        assert_eq!(body["msg"], "Got it");
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["title"], "title 0");
        assert_eq!(body["data"]["deleted_at"], Value::Null);
    }

    #[actix_web::test]
    async fn test_get_missing_or_malformed_is_not_found() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 1).await;
        let app = test_app!(repo);

        for uri in ["/posts/99", "/posts/abc"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_patch_title_only() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 1).await;
        let before = repo.find_by_id(1).await.unwrap().unwrap();
        let app = test_app!(repo);

        actix_web::rt::time::sleep(Duration::from_millis(5)).await;

        let req = test::TestRequest::patch()
            .uri("/posts/1")
            .set_json(json!({"title": "renamed"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({"error": false, "msg": "Post updated successfully"})
        );

        let after = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(after.title, "renamed");
        assert_eq!(after.body, before.body);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[actix_web::test]
    async fn test_patch_errors() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 1).await;
        let app = test_app!(repo);

        let req = test::TestRequest::patch()
            .uri("/posts/1")
            .insert_header(ContentType::json())
            .set_payload(r#"{"title": 12}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri("/posts/1")
            .set_json(json!({"body": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri("/posts/2")
            .set_json(json!({"title": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.title, "title 0");
        assert_eq!(stored.body, "body 0");
    }

    #[actix_web::test]
    async fn test_delete_is_soft() {
        let repo = Arc::new(InMemoryPostRepository::new());
        seed(&repo, 1).await;
        let app = test_app!(repo);

        let req = test::TestRequest::delete().uri("/posts/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"error": false, "msg": "Post deleted"}));

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
