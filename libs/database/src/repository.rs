//! Generic CRUD over any SeaORM entity keyed by a single `Uuid` column.
//!
//! [`BaseRepository`] holds no connection. Every call takes the connection to
//! run on, so the same repository serves the pool (each write autocommits) and
//! a caller-owned [`sea_orm::DatabaseTransaction`].

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, EntityTrait,
    IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::common::{DatabaseError, DatabaseResult};

/// Entities whose primary key is a single `Uuid`.
pub trait UuidEntity: EntityTrait {}

impl<E> UuidEntity for E
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
}

pub struct BaseRepository<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for BaseRepository<E> {}

impl<E> Default for BaseRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for BaseRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseRepository")
            .field("entity", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E> BaseRepository<E> {
    pub const fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: UuidEntity,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub async fn find_by_id<C>(&self, db: &C, id: Uuid) -> DatabaseResult<Option<E::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(E::find_by_id(id).one(db).await?)
    }

    /// Every row, ordered by primary key.
    pub async fn find_all<C>(&self, db: &C) -> DatabaseResult<Vec<E::Model>>
    where
        C: ConnectionTrait,
    {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(db).await?)
    }

    /// Rows matching `condition`.
    pub async fn find<C>(&self, db: &C, condition: Condition) -> DatabaseResult<Vec<E::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(E::find().filter(condition).all(db).await?)
    }

    pub async fn count<C>(&self, db: &C) -> DatabaseResult<u64>
    where
        C: ConnectionTrait,
        E::Model: Sync,
    {
        Ok(E::find().count(db).await?)
    }

    pub async fn insert<C, A>(&self, db: &C, model: A) -> DatabaseResult<E::Model>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        ensure_primary_key(&model)?;
        Ok(model.insert(db).await?)
    }

    pub async fn update<C, A>(&self, db: &C, model: A) -> DatabaseResult<E::Model>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        ensure_primary_key(&model)?;
        Ok(model.update(db).await?)
    }

    /// Returns the number of rows removed.
    pub async fn delete<C, A>(&self, db: &C, model: A) -> DatabaseResult<u64>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        ensure_primary_key(&model)?;
        Ok(model.delete(db).await?.rows_affected)
    }
}

fn ensure_primary_key<A>(model: &A) -> DatabaseResult<()>
where
    A: ActiveModelTrait,
{
    let missing = <A::Entity as EntityTrait>::PrimaryKey::iter()
        .any(|key| matches!(model.get(key.into_column()), ActiveValue::NotSet));

    if missing {
        return Err(DatabaseError::NullArgument("entity".to_string()));
    }
    Ok(())
}
