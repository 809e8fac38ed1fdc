use async_trait::async_trait;

use models::attribute_value::{Model, NewAttributeValue};

use crate::errors::ServiceError;

#[async_trait]
pub trait AttributeValueRepository: Send + Sync {
    async fn find_attribute_value(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn insert_attribute_value(&self, new: NewAttributeValue) -> Result<Model, ServiceError>;
    async fn update_attribute_value(&self, value: Model) -> Result<Model, ServiceError>;
    async fn delete_attribute_value(&self, id: i64) -> Result<bool, ServiceError>;
    /// Ordered by id.
    async fn list_attribute_values_by_document(&self, document_id: i64) -> Result<Vec<Model>, ServiceError>;
}
