//! Standardized JSON envelopes.
//!
//! Every JSON response carries an `error` flag and a human-readable `msg`;
//! successful reads add a `data` payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{PostListData, PostResponse};

/// Successful API response carrying a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(PostEnvelope = ApiResponse<PostResponse>, PostListEnvelope = ApiResponse<PostListData>)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            msg: msg.into(),
            data,
        }
    }
}

/// Successful API response with only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub error: bool,
    #[schema(example = "Post deleted")]
    pub msg: String,
}

impl MessageResponse {
    pub fn ok(msg: impl Into<String>) -> Self {
        Self {
            error: false,
            msg: msg.into(),
        }
    }
}

/// Error body for every 4xx/5xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    #[schema(example = "Post not found")]
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            error: true,
            msg: msg.into(),
        }
    }
}
