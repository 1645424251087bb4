use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post operations, including the like/unlike toggle.
///
/// Likes are a set: liking twice is a no-op, while unliking requires a prior
/// like so that clients holding stale state find out.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn insert(&self, post: NewPost) -> Result<Post, DomainError> {
        Ok(self.repo.insert(post).await?)
    }

    /// Add `net_id` to the likes of post `id`. Idempotent.
    pub async fn like(&self, id: Uuid, net_id: &str) -> Result<Post, DomainError> {
        ensure_net_id(net_id)?;

        self.repo.add_like(id, net_id).await?.ok_or_else(|| {
            DomainError::not_found(ENTITY, id, "Invalid postId or netId supplied")
        })
    }

    /// Remove `net_id` from the likes of post `id`.
    ///
    /// The removal is conditional on membership in the store, so it never
    /// races a concurrent like. Only when it matches nothing is the post
    /// re-read to tell a missing post apart from a missing like.
    pub async fn unlike(&self, id: Uuid, net_id: &str) -> Result<Post, DomainError> {
        ensure_net_id(net_id)?;

        if let Some(post) = self.repo.remove_like(id, net_id).await? {
            return Ok(post);
        }

        match self.repo.find_by_id(id).await? {
            None => Err(DomainError::not_found(
                ENTITY,
                id,
                "Invalid postId supplied",
            )),
            Some(_) => Err(DomainError::InvalidState(
                "The given netId has not liked this post".to_string(),
            )),
        }
    }

    /// Delete post `id`, returning it.
    pub async fn delete(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .delete_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id, "Invalid postId supplied"))
    }

    /// Returns the number of posts removed.
    pub async fn delete_all(&self) -> Result<u64, DomainError> {
        Ok(self.repo.delete_all().await?)
    }
}

fn ensure_net_id(net_id: &str) -> Result<(), DomainError> {
    if net_id.is_empty() {
        return Err(DomainError::Validation("netId must not be empty".to_string()));
    }
    Ok(())
}
