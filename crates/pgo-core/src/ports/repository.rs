use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post persistence gateway.
///
/// Every read ignores soft-deleted rows.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; the store assigns the id and timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a live post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Count live posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Fetch up to `limit` live posts starting at `offset`, in insertion order.
    async fn find_page(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError>;

    /// Persist the title and body of an existing post and refresh `updated_at`.
    ///
    /// Fails with [`RepoError::NotFound`] if the post is missing or soft-deleted.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Mark a live post as deleted.
    ///
    /// Fails with [`RepoError::NotFound`] if the post is missing or already deleted.
    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError>;
}
