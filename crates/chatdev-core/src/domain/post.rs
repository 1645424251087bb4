use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a chat message that participants can like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub message: String,
    /// Participant identifiers (NetIDs) that liked the post, in the order
    /// they were added. Never contains the same identifier twice.
    pub likes: Vec<String>,
    pub time: DateTime<Utc>,
}

impl Post {
    /// Whether `net_id` is currently in the likes set.
    pub fn is_liked_by(&self, net_id: &str) -> bool {
        self.likes.iter().any(|like| like == net_id)
    }
}

/// Fields supplied when inserting a post. The store assigns `id` and `time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub message: String,
    pub likes: Vec<String>,
}

impl NewPost {
    /// A post with no likes.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            likes: Vec::new(),
        }
    }

    /// Seed the likes set. Duplicates are dropped, keeping the first occurrence.
    pub fn with_likes<I, S>(mut self, likes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes.clear();
        for like in likes {
            let like = like.into();
            if !self.likes.contains(&like) {
                self.likes.push(like);
            }
        }
        self
    }
}
