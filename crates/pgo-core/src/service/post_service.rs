//! Post use-case service.
//!
//! # Invariants
//! - Soft-deleted posts behave exactly like missing ones.
//! - A malformed id is reported as not found, never as a validation error.
//! - Listing an empty table yields "Page not found" for every page.

use std::sync::Arc;

use crate::domain::{NewPost, PageRequest, Paginated, Post, PostPatch, parse_post_id};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const POST_NOT_FOUND: &str = "Post not found";
const PAGE_NOT_FOUND: &str = "Page not found";

/// Post service facade over a repository implementation.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post from a title and body.
    pub async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;

        self.repo
            .create(input)
            .await
            .map_err(|e| DomainError::internal("something went wrong", e))
    }

    /// List one page of live posts.
    pub async fn list_posts(&self, request: PageRequest) -> Result<Paginated<Post>, DomainError> {
        let total_count = self
            .repo
            .count()
            .await
            .map_err(|e| DomainError::internal("Failed to get total count of posts", e))?;

        let meta = request
            .meta(total_count)
            .ok_or_else(|| DomainError::not_found(PAGE_NOT_FOUND))?;

        let items = self
            .repo
            .find_page(request.limit(), request.offset())
            .await
            .map_err(|e| DomainError::internal("Failed to fetch posts", e))?;

        Ok(Paginated { items, meta })
    }

    /// Look up a live post by the raw id taken from the request path.
    pub async fn get_post(&self, raw_id: &str) -> Result<Post, DomainError> {
        let Some(id) = parse_post_id(raw_id) else {
            return Err(DomainError::not_found(POST_NOT_FOUND));
        };

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::internal("Failed to get post", e))?
            .ok_or_else(|| DomainError::not_found(POST_NOT_FOUND))
    }

    /// Overwrite the fields present in `patch` and return the stored post.
    pub async fn update_post(&self, raw_id: &str, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self.get_post(raw_id).await?;
        patch.validate()?;
        patch.apply_to(&mut post);

        self.repo.save(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(POST_NOT_FOUND),
            other => DomainError::internal("Failed to update post", other),
        })
    }

    /// Soft-delete a live post.
    pub async fn delete_post(&self, raw_id: &str) -> Result<(), DomainError> {
        let post = self.get_post(raw_id).await?;

        self.repo.soft_delete(post.id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(POST_NOT_FOUND),
            other => DomainError::internal("Failed to delete post", other),
        })
    }
}
