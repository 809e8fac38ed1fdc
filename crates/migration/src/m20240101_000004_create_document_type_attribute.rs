//! Create `document_type_attribute` join table.
//!
//! `position` keeps the attribute order of a document type schema.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentTypeAttribute::Table)
                    .if_not_exists()
                    .col(big_integer(DocumentTypeAttribute::DocumentTypeId).not_null())
                    .col(big_integer(DocumentTypeAttribute::AttributeId).not_null())
                    .col(integer(DocumentTypeAttribute::Position).not_null())
                    .primary_key(
                        Index::create()
                            .col(DocumentTypeAttribute::DocumentTypeId)
                            .col(DocumentTypeAttribute::AttributeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dta_document_type")
                            .from(DocumentTypeAttribute::Table, DocumentTypeAttribute::DocumentTypeId)
                            .to(DocumentType::Table, DocumentType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dta_attribute")
                            .from(DocumentTypeAttribute::Table, DocumentTypeAttribute::AttributeId)
                            .to(Attribute::Table, Attribute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentTypeAttribute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DocumentTypeAttribute { Table, DocumentTypeId, AttributeId, Position }

#[derive(DeriveIden)]
enum DocumentType { Table, Id }

#[derive(DeriveIden)]
enum Attribute { Table, Id }
