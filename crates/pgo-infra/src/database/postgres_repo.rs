//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use pgo_core::domain::{NewPost, Post, PostId};
use pgo_core::error::RepoError;
use pgo_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }

    /// Rows that have not been soft-deleted.
    fn live() -> Select<PostEntity> {
        PostEntity::find().filter(post::Column::DeletedAt.is_null())
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
            title: Set(input.title),
            body: Set(input.body),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = Self::live()
            .filter(post::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Self::live().count(&self.db).await.map_err(map_db_err)
    }

    async fn find_page(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError> {
        let result = Self::live()
            .order_by_asc(post::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let now = Utc::now();
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(entity.title.clone()))
            .col_expr(post::Column::Body, Expr::value(entity.body.clone()))
            .col_expr(post::Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(post::Column::Id.eq(entity.id))
            .filter(post::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = entity.id, "Post updated");
        entity.updated_at = now;
        Ok(entity)
    }

    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError> {
        let now = Utc::now().fixed_offset();
        let result = PostEntity::update_many()
            .col_expr(post::Column::DeletedAt, Expr::value(now))
            .col_expr(post::Column::UpdatedAt, Expr::value(now))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Post soft-deleted");
        Ok(())
    }
}
