use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - the storage surface consumed by handlers and tests.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Return an arbitrary stored post (first match), if any exist.
    async fn find_first(&self) -> Result<Option<Post>, RepoError>;

    /// Persist a single new post; storage assigns the id.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Bulk-insert drafts, returning them with their assigned ids in order.
    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<Post>, RepoError>;

    /// Fully replace author/title/content of an existing post, keyed by
    /// `post.id`. Fails with `NotFound` if no such post exists.
    async fn replace(&self, post: Post) -> Result<(), RepoError>;

    /// Delete a post by id. Fails with `NotFound` if no such post exists.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Irreversibly remove all persisted posts, including the backing table.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
