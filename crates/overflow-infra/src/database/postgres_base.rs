use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use overflow_core::error::RepoError;
use overflow_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

pub(crate) fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

pub(crate) fn write_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(violation) => constraint_err(violation),
        None => match err {
            DbErr::Conn(e) => RepoError::Connection(e.to_string()),
            other => query_err(other),
        },
    }
}

/// Map a constraint violation reported by the driver.
pub(crate) fn constraint_err(violation: SqlErr) -> RepoError {
    match violation {
        SqlErr::UniqueConstraintViolation(detail)
        | SqlErr::ForeignKeyConstraintViolation(detail) => RepoError::Constraint(detail),
        other => RepoError::Query(other.to_string()),
    }
}

/// Convert fetched rows into domain values, failing on the first bad row.
pub(crate) fn convert_all<M, T>(models: Vec<M>) -> Result<Vec<T>, RepoError>
where
    T: TryFrom<M, Error = RepoError>,
{
    models.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: TryFrom<E::Model, Error = RepoError> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(query_err)?;

        result.map(T::try_from).transpose()
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();

        // Every column is `Set`, so try an update first and fall back to an
        // insert when no row matched the primary key.
        let model = match active_model.clone().update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => active_model.insert(&self.db).await.map_err(write_err)?,
            Err(e) => return Err(write_err(e)),
        };

        T::try_from(model)
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
