//! OpenAPI document and Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pgo_shared::dto::{
    CreatePostRequest, PaginationMeta, PostListData, PostResponse, UpdatePostRequest,
};
use pgo_shared::response::{PostEnvelope, PostListEnvelope};
use pgo_shared::{ErrorResponse, MessageResponse};

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "pgo posts API", description = "Blog post CRUD with pagination and soft deletes"),
    paths(
        handlers::posts::create_post,
        handlers::posts::list_posts,
        handlers::posts::get_post,
        handlers::posts::update_post,
        handlers::posts::delete_post,
        handlers::health::healthz,
        handlers::joke::random_joke,
    ),
    components(schemas(
        CreatePostRequest,
        UpdatePostRequest,
        PostResponse,
        PaginationMeta,
        PostListData,
        PostEnvelope,
        PostListEnvelope,
        MessageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "posts", description = "Blog post management"),
        (name = "meta", description = "Liveness and greeting")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui/`, OpenAPI document at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}
