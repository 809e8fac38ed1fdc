use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{attribute, document};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attribute_value")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub attribute_id: i64,
    pub document_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Attribute,
    Document,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Attribute => Entity::belongs_to(attribute::Entity)
                .from(Column::AttributeId)
                .to(attribute::Column::Id)
                .into(),
            Relation::Document => Entity::belongs_to(document::Entity)
                .from(Column::DocumentId)
                .to(document::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAttributeValue {
    pub attribute_id: i64,
    pub document_id: i64,
    pub value: Option<String>,
}

impl NewAttributeValue {
    pub fn into_model(self, id: i64) -> Model {
        Model { id, attribute_id: self.attribute_id, document_id: self.document_id, value: self.value }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            attribute_id: Set(self.attribute_id),
            document_id: Set(self.document_id),
            value: Set(self.value),
        }
    }
}
