use async_trait::async_trait;

use common::pagination::{Page, Pagination};
use models::document::{Model, NewDocument};

use crate::errors::ServiceError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_document(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn insert_document(&self, new: NewDocument) -> Result<Model, ServiceError>;
    async fn update_document(&self, document: Model) -> Result<Model, ServiceError>;
    /// Also removes the document's attribute values.
    async fn delete_document(&self, id: i64) -> Result<bool, ServiceError>;
    async fn list_documents(&self, page: Pagination) -> Result<Page<Model>, ServiceError>;
}
