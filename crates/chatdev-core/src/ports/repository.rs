use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Member, NewMember, NewPost, Post};
use crate::error::RepoError;

/// Generic collection contract shared by every document collection.
///
/// `T` is the stored record, `N` the fields supplied on insert.
#[async_trait]
pub trait BaseRepository<T, N>: Send + Sync {
    /// Fetch every record in the collection.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find a record by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError>;

    /// Insert a record; the store assigns its identity.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Delete a record by ID, returning it if it existed.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError>;

    /// Delete every record, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}

/// Member collection.
#[async_trait]
pub trait MemberRepository: BaseRepository<Member, NewMember> {}

/// Post collection, with the atomic set operators on `likes`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost> {
    /// Atomically add `net_id` to the likes of post `id` unless already present.
    ///
    /// Returns the post after the update, or `None` if no post has that id.
    async fn add_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError>;

    /// Atomically remove `net_id` from the likes of post `id`, matching only
    /// when `net_id` is currently present.
    ///
    /// Returns the post after the update, or `None` if nothing matched
    /// (either the post is missing or `net_id` is not in its likes).
    async fn remove_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError>;
}
