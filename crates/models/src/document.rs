use sea_orm::{entity::prelude::*, NotSet, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{document_type, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub creation_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
    pub user_id: Uuid,
    pub document_type_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    DocumentType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::DocumentType => Entity::belongs_to(document_type::Entity)
                .from(Column::DocumentTypeId)
                .to(document_type::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<document_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::DocumentType.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload; the id comes from the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDocument {
    pub name: String,
    pub creation_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
    pub user_id: Uuid,
    pub document_type_id: i64,
}

impl NewDocument {
    pub fn into_model(self, id: i64) -> Model {
        Model {
            id,
            name: self.name,
            creation_date: self.creation_date,
            update_date: self.update_date,
            user_id: self.user_id,
            document_type_id: self.document_type_id,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            creation_date: Set(self.creation_date),
            update_date: Set(self.update_date),
            user_id: Set(self.user_id),
            document_type_id: Set(self.document_type_id),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > 255 {
        return Err(ModelError::Validation("name longer than 255 characters".into()));
    }
    Ok(())
}

/// `update_date` may never precede `creation_date`.
pub fn validate_dates(creation_date: &DateTimeWithTimeZone, update_date: &DateTimeWithTimeZone) -> Result<(), ModelError> {
    if update_date < creation_date {
        return Err(ModelError::Validation("update_date is before creation_date".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn dates_must_be_ordered() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        assert!(validate_dates(&now, &now).is_ok());
        assert!(validate_dates(&(now - Duration::days(1)), &now).is_ok());
        assert!(validate_dates(&now, &(now - Duration::seconds(1))).is_err());
    }

    #[test]
    fn name_required() {
        assert!(validate_name("contract").is_ok());
        assert!(validate_name(" ").is_err());
    }
}
