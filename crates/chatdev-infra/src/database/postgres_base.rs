use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbBackend, DbConn, DbErr, EntityName, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, Statement,
};
use uuid::Uuid;

use chatdev_core::error::RepoError;
use chatdev_core::ports::BaseRepository;

/// A SeaORM entity that backs a document collection.
///
/// Ties the entity to the domain record it yields and the insert fields it accepts.
pub trait CollectionEntity: EntityTrait {
    type Record: From<Self::Model> + Send + Sync + 'static;
    type New: Into<Self::ActiveModel> + Send + 'static;
}

/// Generic PostgreSQL collection over a SeaORM entity keyed by `id: Uuid`.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a driver error onto the repository error taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl<E> BaseRepository<E::Record, E::New> for PostgresBaseRepository<E>
where
    E: CollectionEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    async fn find_all(&self) -> Result<Vec<E::Record>, RepoError> {
        let rows = E::find().all(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Record>, RepoError> {
        let row = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: E::New) -> Result<E::Record, RepoError> {
        let active_model: E::ActiveModel = new.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<E::Record>, RepoError> {
        // Single statement so the returned row is exactly the one removed.
        let table = E::default().table_name().to_owned();
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            format!(r#"DELETE FROM "{table}" WHERE "id" = $1 RETURNING *"#),
            [id.into()],
        );

        let row = E::find()
            .from_raw_sql(stmt)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = E::delete_many()
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows = result.rows_affected, "Deleted all rows");
        Ok(result.rows_affected)
    }
}
