use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Document: lookups by owner and by type
        manager
            .create_index(
                Index::create()
                    .name("idx_document_user")
                    .table(Document::Table)
                    .col(Document::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_document_document_type")
                    .table(Document::Table)
                    .col(Document::DocumentTypeId)
                    .to_owned(),
            )
            .await?;

        // AttributeValue: listing per document
        manager
            .create_index(
                Index::create()
                    .name("idx_attribute_value_document")
                    .table(AttributeValue::Table)
                    .col(AttributeValue::DocumentId)
                    .to_owned(),
            )
            .await?;

        // DocumentTypeAttribute: ordered schema reads
        manager
            .create_index(
                Index::create()
                    .name("idx_dta_type_position")
                    .table(DocumentTypeAttribute::Table)
                    .col(DocumentTypeAttribute::DocumentTypeId)
                    .col(DocumentTypeAttribute::Position)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_dta_type_position").table(DocumentTypeAttribute::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_attribute_value_document").table(AttributeValue::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_document_document_type").table(Document::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_document_user").table(Document::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Document { Table, UserId, DocumentTypeId }

#[derive(DeriveIden)]
enum AttributeValue { Table, DocumentId }

#[derive(DeriveIden)]
enum DocumentTypeAttribute { Table, DocumentTypeId, Position }
