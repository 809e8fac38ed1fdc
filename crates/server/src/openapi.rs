use chrono::{DateTime, FixedOffset};
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
}

#[derive(ToSchema)]
pub struct UserPageDoc { pub items: Vec<UserDoc>, pub page: u64, pub size: u64, pub total_items: u64, pub total_pages: u64 }

#[derive(ToSchema)]
pub struct UserDraftDoc {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct UserPatchDoc {
    pub login: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<String>,
}

#[derive(ToSchema)]
pub struct PasswordChangeDoc { pub old_password: String, pub new_password: String }

#[derive(ToSchema)]
pub struct DocumentDoc {
    pub id: i64,
    pub name: String,
    pub creation_date: DateTime<FixedOffset>,
    pub update_date: DateTime<FixedOffset>,
    pub user_id: Uuid,
    pub document_type_id: i64,
}

#[derive(ToSchema)]
pub struct DocumentPageDoc { pub items: Vec<DocumentDoc>, pub page: u64, pub size: u64, pub total_items: u64, pub total_pages: u64 }

#[derive(ToSchema)]
pub struct DocumentDraftDoc {
    pub name: String,
    pub user_id: Uuid,
    pub document_type_id: i64,
    pub creation_date: DateTime<FixedOffset>,
    pub update_date: DateTime<FixedOffset>,
}

/// Rejected with 400 when the stored document is outside the update window.
#[derive(ToSchema)]
pub struct DocumentPatchDoc {
    pub name: Option<String>,
    pub creation_date: Option<DateTime<FixedOffset>>,
    pub update_date: Option<DateTime<FixedOffset>>,
    pub user_id: Option<Uuid>,
    pub document_type_id: Option<i64>,
}

#[derive(ToSchema)]
pub struct DocumentAttributeDoc { pub name: String }

#[derive(ToSchema)]
pub struct DocumentTypeDoc {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
    pub attributes: Vec<DocumentAttributeDoc>,
}

#[derive(ToSchema)]
pub struct DocumentTypePageDoc { pub items: Vec<DocumentTypeDoc>, pub page: u64, pub size: u64, pub total_items: u64, pub total_pages: u64 }

#[derive(ToSchema)]
pub struct DocumentTypeDraftDoc { pub name: String, pub description: Option<String>, pub attribute_ids: Option<Vec<i64>> }

#[derive(ToSchema)]
pub struct DocumentTypePatchDoc { pub name: Option<String>, pub description: Option<String>, pub attribute_ids: Option<Vec<i64>> }

#[derive(ToSchema)]
pub struct AttributeDoc { pub id: i64, pub name: String, pub data_type: String }

#[derive(ToSchema)]
pub struct AttributePageDoc { pub items: Vec<AttributeDoc>, pub page: u64, pub size: u64, pub total_items: u64, pub total_pages: u64 }

#[derive(ToSchema)]
pub struct AttributeDraftDoc { pub name: String, pub data_type: String }

#[derive(ToSchema)]
pub struct AttributePatchDoc { pub name: Option<String>, pub data_type: Option<String> }

#[derive(ToSchema)]
pub struct AttributeValueDoc { pub id: i64, pub attribute_id: i64, pub document_id: i64, pub value: Option<String> }

#[derive(ToSchema)]
pub struct AttributeValueDraftDoc { pub attribute_id: Option<i64>, pub document_id: Option<i64>, pub value: Option<String> }

#[derive(ToSchema)]
pub struct AttributeValueUpdateDoc { pub value: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::update_password,
        crate::routes::users::delete,
        crate::routes::documents::list,
        crate::routes::documents::get,
        crate::routes::documents::create,
        crate::routes::documents::update,
        crate::routes::documents::delete,
        crate::routes::document_types::list,
        crate::routes::document_types::get,
        crate::routes::document_types::create,
        crate::routes::document_types::update,
        crate::routes::document_types::delete,
        crate::routes::attributes::list,
        crate::routes::attributes::get,
        crate::routes::attributes::create,
        crate::routes::attributes::update,
        crate::routes::attributes::delete,
        crate::routes::attribute_values::create,
        crate::routes::attribute_values::get,
        crate::routes::attribute_values::update_value,
        crate::routes::attribute_values::delete,
        crate::routes::attribute_values::list_by_document,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            UserDoc,
            UserPageDoc,
            UserDraftDoc,
            UserPatchDoc,
            PasswordChangeDoc,
            DocumentDoc,
            DocumentPageDoc,
            DocumentDraftDoc,
            DocumentPatchDoc,
            DocumentAttributeDoc,
            DocumentTypeDoc,
            DocumentTypePageDoc,
            DocumentTypeDraftDoc,
            DocumentTypePatchDoc,
            AttributeDoc,
            AttributePageDoc,
            AttributeDraftDoc,
            AttributePatchDoc,
            AttributeValueDoc,
            AttributeValueDraftDoc,
            AttributeValueUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "documents"),
        (name = "document-types"),
        (name = "attributes"),
        (name = "attribute-values")
    )
)]
pub struct ApiDoc;
