//! SeaORM implementation of the post repository port.

use async_trait::async_trait;
use sea_orm::sea_query::Table;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait};
use uuid::Uuid;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed post repository.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_first(&self) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post::new(draft.author, draft.title, draft.content);
        let active: post::ActiveModel = post.into();

        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<Post>, RepoError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<Post> = drafts
            .into_iter()
            .map(|d| Post::new(d.author, d.title, d.content))
            .collect();
        let models: Vec<post::ActiveModel> = posts.iter().cloned().map(Into::into).collect();

        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(count = posts.len(), "Seeded posts");

        Ok(posts)
    }

    async fn replace(&self, post: Post) -> Result<(), RepoError> {
        let active: post::ActiveModel = post.into();

        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepoError::NotFound),
            Err(e) => Err(RepoError::Query(e.to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let backend = self.db.get_database_backend();
        let stmt = Table::drop().table(PostEntity).if_exists().to_owned();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::warn!("Dropped posts table");

        Ok(())
    }
}
