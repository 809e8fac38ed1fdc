use async_trait::async_trait;

use common::pagination::{Page, Pagination};
use models::attribute;
use models::document_type::{Model, NewDocumentType};

use crate::errors::ServiceError;

#[async_trait]
pub trait DocumentTypeRepository: Send + Sync {
    async fn find_document_type(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    /// Attributes of a type in schema order.
    async fn document_type_attributes(&self, id: i64) -> Result<Vec<attribute::Model>, ServiceError>;
    async fn insert_document_type(&self, new: NewDocumentType, attribute_ids: &[i64]) -> Result<Model, ServiceError>;
    /// `attribute_ids` replaces the schema when present.
    async fn update_document_type(&self, document_type: Model, attribute_ids: Option<&[i64]>) -> Result<Model, ServiceError>;
    async fn delete_document_type(&self, id: i64) -> Result<bool, ServiceError>;
    async fn list_document_types(&self, page: Pagination) -> Result<Page<Model>, ServiceError>;
}
