//! Table creation for the six shop tables.
//!
//! Run by the binary with `--migrate` and by the test suite against an
//! in-memory SQLite database.

use sea_orm::{DbErr, EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entities::{car, closed_request, customer, mechanic, owns, service_request};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateShopTables)]
    }
}

pub struct CreateShopTables;

impl MigrationName for CreateShopTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_shop_tables"
    }
}

fn create_table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for CreateShopTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Referenced tables first.
        manager.create_table(create_table(&schema, customer::Entity)).await?;
        manager.create_table(create_table(&schema, mechanic::Entity)).await?;
        manager.create_table(create_table(&schema, car::Entity)).await?;
        manager.create_table(create_table(&schema, owns::Entity)).await?;
        manager
            .create_table(create_table(&schema, service_request::Entity))
            .await?;
        manager
            .create_table(create_table(&schema, closed_request::Entity))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(closed_request::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(service_request::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(owns::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(car::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(mechanic::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(customer::Entity).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
