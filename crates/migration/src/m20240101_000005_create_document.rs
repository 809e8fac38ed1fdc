//! Create `document` table with FKs to `user` and `document_type`.
//!
//! Deleting an owner or a type is restricted; cascading through documents is
//! left to explicit deletes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(big_integer(Document::Id).auto_increment().primary_key())
                    .col(string_len(Document::Name, 255).not_null())
                    .col(timestamp_with_time_zone(Document::CreationDate).not_null())
                    .col(timestamp_with_time_zone(Document::UpdateDate).not_null())
                    .col(uuid(Document::UserId).not_null())
                    .col(big_integer(Document::DocumentTypeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_user")
                            .from(Document::Table, Document::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_document_type")
                            .from(Document::Table, Document::DocumentTypeId)
                            .to(DocumentType::Table, DocumentType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Document::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Document { Table, Id, Name, CreationDate, UpdateDate, UserId, DocumentTypeId }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum DocumentType { Table, Id }
