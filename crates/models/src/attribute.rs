use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attribute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Semantic label such as "text" or "date".
    pub data_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewAttribute {
    pub name: String,
    pub data_type: String,
}

impl NewAttribute {
    pub fn into_model(self, id: i64) -> Model {
        Model { id, name: self.name, data_type: self.data_type }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel { id: NotSet, name: Set(self.name), data_type: Set(self.data_type) }
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

pub fn validate_data_type(data_type: &str) -> Result<(), ModelError> {
    if data_type.trim().is_empty() {
        return Err(ModelError::Validation("data_type required".into()));
    }
    if data_type.chars().count() > 64 {
        return Err(ModelError::Validation("data_type longer than 64 characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_type_fit_their_columns() {
        assert!(validate_name(&"a".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name(&"a".repeat(300)).is_err());
        assert!(validate_data_type("date").is_ok());
        assert!(validate_data_type(&"x".repeat(65)).is_err());
    }
}
