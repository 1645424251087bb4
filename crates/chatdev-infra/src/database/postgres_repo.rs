//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{DbBackend, EntityTrait, Statement};
use uuid::Uuid;

use chatdev_core::domain::Post;
use chatdev_core::error::RepoError;
use chatdev_core::ports::{MemberRepository, PostRepository};

use super::entity::member::Entity as MemberEntity;
use super::entity::post::Entity as PostEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL member collection.
pub type PostgresMemberRepository = PostgresBaseRepository<MemberEntity>;

/// PostgreSQL post collection.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Add-to-set: append only when absent, in one statement.
pub(super) const ADD_LIKE_SQL: &str = r#"UPDATE "posts"
SET "likes" = CASE WHEN $2 = ANY("likes") THEN "likes" ELSE array_append("likes", $2) END
WHERE "id" = $1
RETURNING *"#;

/// Remove-from-set, matching only when the value is present.
pub(super) const REMOVE_LIKE_SQL: &str = r#"UPDATE "posts"
SET "likes" = array_remove("likes", $2)
WHERE "id" = $1 AND $2 = ANY("likes")
RETURNING *"#;

#[async_trait]
impl MemberRepository for PostgresMemberRepository {}

impl PostgresPostRepository {
    async fn update_likes(
        &self,
        sql: &'static str,
        id: Uuid,
        net_id: &str,
    ) -> Result<Option<Post>, RepoError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [id.into(), net_id.into()],
        );

        let row = PostEntity::find()
            .from_raw_sql(stmt)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn add_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, net_id, "Adding like");
        self.update_likes(ADD_LIKE_SQL, id, net_id).await
    }

    async fn remove_like(&self, id: Uuid, net_id: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, net_id, "Removing like");
        self.update_likes(REMOVE_LIKE_SQL, id, net_id).await
    }
}
