//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use pgo_core::domain::{NewPost, Post, PostId};
use pgo_core::error::RepoError;
use pgo_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    last_id: PostId,
    rows: BTreeMap<PostId, Post>,
}

impl Store {
    fn live_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.rows.get_mut(&id).filter(|p| !p.is_deleted())
    }
}

/// Post repository over an ordered map with async RwLock.
///
/// Ids are handed out sequentially from 1 and never reused, so key order is
/// insertion order. Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn find_including_deleted(&self, id: PostId) -> Option<Post> {
        self.store.read().await.rows.get(&id).cloned()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let post = Post {
            id: store.last_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            title: input.title,
            body: input.body,
        };
        store.rows.insert(post.id, post.clone());

        tracing::debug!(post_id = post.id, "Post created in memory");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).filter(|p| !p.is_deleted()).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().filter(|p| !p.is_deleted()).count() as u64)
    }

    async fn find_page(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|p| !p.is_deleted())
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let row = store.live_mut(entity.id).ok_or(RepoError::NotFound)?;

        row.title = entity.title;
        row.body = entity.body;
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let row = store.live_mut(id).ok_or(RepoError::NotFound)?;

        let now = Utc::now();
        row.deleted_at = Some(now);
        row.updated_at = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(NewPost::new("a", "1")).await.unwrap();
        let second = repo.create(NewPost::new("b", "2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_row() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(NewPost::new("a", "1")).await.unwrap();

        repo.soft_delete(post.id).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
        let stored = repo.find_including_deleted(post.id).await.unwrap();
        assert!(stored.deleted_at.is_some());
        assert!(matches!(
            repo.soft_delete(post.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_find_page_skips_deleted_rows() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.create(NewPost::new(format!("t{i}"), "b")).await.unwrap();
        }
        repo.soft_delete(2).await.unwrap();

        let page = repo.find_page(2, 1).await.unwrap();
        let ids: Vec<_> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_save_refreshes_updated_at() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.create(NewPost::new("a", "1")).await.unwrap();
        let created = post.updated_at;

        post.title = "renamed".to_string();
        let saved = repo.save(post).await.unwrap();

        assert_eq!(saved.title, "renamed");
        assert_eq!(saved.body, "1");
        assert!(saved.updated_at >= created);
    }

    #[tokio::test]
    async fn test_save_deleted_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(NewPost::new("a", "1")).await.unwrap();
        repo.soft_delete(post.id).await.unwrap();

        assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
    }
}
