//! Create `document_type` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentType::Table)
                    .if_not_exists()
                    .col(big_integer(DocumentType::Id).auto_increment().primary_key())
                    .col(string_len(DocumentType::Name, 255).not_null())
                    .col(text(DocumentType::Description).not_null())
                    .col(timestamp_with_time_zone(DocumentType::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DocumentType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DocumentType { Table, Id, Name, Description, CreatedAt }
