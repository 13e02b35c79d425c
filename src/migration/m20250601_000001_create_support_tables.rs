use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;
use crate::entity::{inventory, technician, ticket};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        create_from_entity(manager, &schema, ticket::Entity).await?;
        create_from_entity(manager, &schema, inventory::Entity).await?;
        create_from_entity(manager, &schema, technician::Entity).await?;

        // gestión de tickets: filtro por estado, orden por fecha de creación
        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_estado")
                    .table(ticket::Entity)
                    .col(ticket::Column::Status)
                    .if_not_exists()
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_fecha_creacion")
                    .table(ticket::Entity)
                    .col(ticket::Column::CreatedAt)
                    .if_not_exists()
                    .to_owned()
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(technician::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(inventory::Entity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ticket::Entity).if_exists().to_owned())
            .await
    }
}

async fn create_from_entity<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned()
        )
        .await
}
