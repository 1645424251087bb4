//! In-memory collections - used for tests and when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use chatdev_core::domain::{Member, NewMember, NewPost, Post};
use chatdev_core::error::RepoError;
use chatdev_core::ports::{BaseRepository, MemberRepository, PostRepository};

/// A record the in-memory store knows how to create and identify.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    type New: Send + 'static;

    /// Build the stored record, assigning its identity.
    fn create(new: Self::New) -> Self;

    fn id(&self) -> Uuid;
}

impl StoredRecord for Member {
    type New = NewMember;

    fn create(new: NewMember) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            position: new.position,
            subteam: new.subteam,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl StoredRecord for Post {
    type New = NewPost;

    fn create(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: new.message,
            likes: new.likes,
            time: Utc::now(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A collection kept in a `Vec` behind an async `RwLock`, in insertion order.
///
/// Every mutation runs under one write lock, which makes each operation
/// atomic with respect to concurrent requests.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

/// In-memory member collection.
pub type InMemoryMemberRepository = InMemoryRepository<Member>;

/// In-memory post collection.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: StoredRecord> BaseRepository<T, T::New> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, new: T::New) -> Result<T, RepoError> {
        let record = T::create(new);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        Ok(Some(records.remove(index)))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut records = self.records.write().await;
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn add_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError> {
        let mut posts = self.records.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if !post.is_liked_by(net_id) {
            post.likes.push(net_id.to_string());
        }
        Ok(Some(post.clone()))
    }

    async fn remove_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError> {
        let mut posts = self.records.write().await;
        let Some(post) = posts
            .iter_mut()
            .find(|p| p.id == id && p.is_liked_by(net_id))
        else {
            return Ok(None);
        };

        post.likes.retain(|like| like != net_id);
        Ok(Some(post.clone()))
    }
}
