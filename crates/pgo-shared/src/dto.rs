//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "First post")]
    pub body: String,
}

/// Partial update of a post. Omitted or `null` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Page size, default 10, values above 20 are clamped to 20.
    pub limit: Option<u64>,
    /// 1-indexed page number, default 1.
    pub page: Option<u64>,
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub title: String,
    pub body: String,
}

/// Position of a page within the whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u64,
}

/// One page of posts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListData {
    pub posts: Vec<PostResponse>,
    pub meta: PaginationMeta,
}
