use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{attribute, document_type_attribute};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<attribute::Entity> for Entity {
    fn to() -> RelationDef { document_type_attribute::Relation::Attribute.def() }

    fn via() -> Option<RelationDef> {
        Some(document_type_attribute::Relation::DocumentType.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDocumentType {
    pub name: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

impl NewDocumentType {
    pub fn into_model(self, id: i64) -> Model {
        Model { id, name: self.name, description: self.description, created_at: self.created_at }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            created_at: Set(self.created_at),
        }
    }
}

pub const NAME_MAX_LEN: usize = 255;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_fits_the_column() {
        assert!(validate_name(&"т".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name(&"t".repeat(NAME_MAX_LEN + 1)).is_err());
        assert!(validate_name("  ").is_err());
    }
}
