//! Create `attribute_value` table linking an attribute definition to a document.
//!
//! Values go away with their document.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttributeValue::Table)
                    .if_not_exists()
                    .col(big_integer(AttributeValue::Id).auto_increment().primary_key())
                    .col(big_integer(AttributeValue::AttributeId).not_null())
                    .col(big_integer(AttributeValue::DocumentId).not_null())
                    .col(ColumnDef::new(AttributeValue::Value).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attribute_value_attribute")
                            .from(AttributeValue::Table, AttributeValue::AttributeId)
                            .to(Attribute::Table, Attribute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attribute_value_document")
                            .from(AttributeValue::Table, AttributeValue::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AttributeValue::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AttributeValue { Table, Id, AttributeId, DocumentId, Value }

#[derive(DeriveIden)]
enum Attribute { Table, Id }

#[derive(DeriveIden)]
enum Document { Table, Id }
