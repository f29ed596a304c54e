use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use blogicum_core::domain::Validate;
use blogicum_core::error::RepoError;
use blogicum_core::ports::BaseRepository;

use super::errors::map_db_err;

/// Generic SeaORM repository implementation.
///
/// Works for any entity whose model converts into a domain type `T`;
/// domain-specific queries live on the concrete aliases in `repositories`.
/// Repositories share one pool through an `Arc`; `DbConn` is not `Clone`
/// once SeaORM's `mock` feature is on.
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self::shared(Arc::new(db))
    }

    pub fn shared(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> &DbConn {
        &self.db
    }
}

/// Convert fetched rows into domain values.
pub(crate) fn into_domain<M, T>(models: Vec<M>) -> Result<Vec<T>, RepoError>
where
    T: TryFrom<M>,
    <T as TryFrom<M>>::Error: Into<RepoError>,
{
    models
        .into_iter()
        .map(|model| T::try_from(model).map_err(Into::into))
        .collect()
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + fmt::Debug + 'static,
    T: TryFrom<E::Model> + Into<E::ActiveModel> + Validate + Send + Sync + 'static,
    <T as TryFrom<E::Model>>::Error: Into<RepoError>,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(self.conn()).await.map_err(map_db_err)?;

        result
            .map(|model| T::try_from(model).map_err(Into::into))
            .transpose()
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        entity.validate()?;

        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(table = E::default().table_name(), "Row inserted");

        T::try_from(model).map_err(Into::into)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        entity.validate()?;

        // `before_save` drops `created_at` from the statement.
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(table = E::default().table_name(), "Row updated");

        T::try_from(model).map_err(Into::into)
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(table = E::default().table_name(), ?id, "Row deleted");
        Ok(())
    }
}
