//! Conversions from stored entities to the shapes returned to callers.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use uuid::Uuid;

use models::{attribute, attribute_value, document, document_type, user};

/// A user without the password hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
}

impl From<user::Model> for UserDto {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            login: m.login,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            patronymic: m.patronymic,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentDto {
    pub id: i64,
    pub name: String,
    pub creation_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
    pub user_id: Uuid,
    pub document_type_id: i64,
}

impl From<document::Model> for DocumentDto {
    fn from(m: document::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            creation_date: m.creation_date,
            update_date: m.update_date,
            user_id: m.user_id,
            document_type_id: m.document_type_id,
        }
    }
}

/// Attribute as listed inside a document type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentAttributeDto {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentTypeDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub attributes: Vec<DocumentAttributeDto>,
}

impl From<(document_type::Model, Vec<attribute::Model>)> for DocumentTypeDto {
    fn from((m, attributes): (document_type::Model, Vec<attribute::Model>)) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            attributes: attributes.into_iter().map(|a| DocumentAttributeDto { name: a.name }).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttributeDto {
    pub id: i64,
    pub name: String,
    pub data_type: String,
}

impl From<attribute::Model> for AttributeDto {
    fn from(m: attribute::Model) -> Self {
        Self { id: m.id, name: m.name, data_type: m.data_type }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttributeValueDto {
    pub id: i64,
    pub attribute_id: i64,
    pub document_id: i64,
    pub value: Option<String>,
}

impl From<attribute_value::Model> for AttributeValueDto {
    fn from(m: attribute_value::Model) -> Self {
        Self { id: m.id, attribute_id: m.attribute_id, document_id: m.document_id, value: m.value }
    }
}
