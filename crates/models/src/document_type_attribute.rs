//! Ordered membership of an attribute in a document type schema.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{attribute, document_type};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_type_attribute")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub document_type_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub attribute_id: i64,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    DocumentType,
    Attribute,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::DocumentType => Entity::belongs_to(document_type::Entity)
                .from(Column::DocumentTypeId)
                .to(document_type::Column::Id)
                .into(),
            Relation::Attribute => Entity::belongs_to(attribute::Entity)
                .from(Column::AttributeId)
                .to(attribute::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
