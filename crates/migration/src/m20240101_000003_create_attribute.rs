//! Create `attribute` table: definitions referenced by document type schemas.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attribute::Table)
                    .if_not_exists()
                    .col(big_integer(Attribute::Id).auto_increment().primary_key())
                    .col(string_len(Attribute::Name, 255).not_null())
                    .col(string_len(Attribute::DataType, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attribute::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attribute { Table, Id, Name, DataType }
