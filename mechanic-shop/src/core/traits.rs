use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryTrait, SqlErr, Value,
};
use std::fmt::Display;

use crate::database::access;
use crate::errors::ShopError;

/// A table the shop reads and inserts into, keyed by a single column.
///
/// Every operation is generic over [`ConnectionTrait`] so workflows can run
/// against a plain connection or inside a transaction.
#[async_trait]
pub trait ShopResource: Sized + Send + Sync + FromQueryResult {
    type EntityType: EntityTrait<Model = Self> + Sync;
    type ColumnType: ColumnTrait + Send + Sync;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>
        + ActiveModelBehavior
        + Send
        + Sync;
    type CreateModel: Into<Self::ActiveModelType> + Send;
    type Key: Into<Value> + Clone + Display + Send + Sync + 'static;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;

    /// Row-count probe for a key.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if the query fails.
    async fn exists<C>(db: &C, key: Self::Key) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Self::EntityType::find()
            .filter(Self::ID_COLUMN.eq(key))
            .build(db.get_database_backend());
        Ok(access::query_count(db, stmt).await? > 0)
    }

    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if no row has this key.
    async fn get_one<C>(db: &C, key: Self::Key) -> Result<Self, ShopError>
    where
        C: ConnectionTrait,
    {
        Self::EntityType::find()
            .filter(Self::ID_COLUMN.eq(key.clone()))
            .one(db)
            .await?
            .ok_or_else(|| ShopError::not_found(Self::RESOURCE_NAME_SINGULAR, Some(key.to_string())))
    }

    /// Insert one row.
    ///
    /// # Errors
    ///
    /// A unique-constraint violation becomes [`ShopError::Conflict`]; any
    /// other failure becomes [`ShopError::Database`].
    async fn create<C>(db: &C, create_model: Self::CreateModel) -> Result<(), ShopError>
    where
        C: ConnectionTrait,
    {
        let active_model: Self::ActiveModelType = create_model.into();
        let stmt = Self::EntityType::insert(active_model).build(db.get_database_backend());

        match access::execute_update(db, stmt).await {
            Ok(_) => {
                tracing::info!(resource = Self::RESOURCE_NAME_SINGULAR, "Inserted row");
                Ok(())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => Err(ShopError::conflict(
                    format!("Duplicate {}: {detail}", Self::RESOURCE_NAME_SINGULAR),
                )),
                _ => Err(ShopError::database(err)),
            },
        }
    }
}
