//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::database::postgres_base::CollectionEntity;

use chatdev_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// `text[]`; only ever changed through the set operators in `postgres_repo`.
    pub likes: Vec<String>,
    pub time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CollectionEntity for Entity {
    type Record = Post;
    type New = NewPost;
}

impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            message: model.message,
            likes: model.likes,
            time: model.time.into(),
        }
    }
}

/// A fresh row for an insert; the id and creation time are assigned here.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            message: Set(post.message),
            likes: Set(post.likes),
            time: Set(Utc::now().into()),
        }
    }
}
