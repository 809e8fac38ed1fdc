use async_trait::async_trait;

use common::pagination::{Page, Pagination};
use models::attribute::{Model, NewAttribute};

use crate::errors::ServiceError;

#[async_trait]
pub trait AttributeRepository: Send + Sync {
    async fn find_attribute(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn insert_attribute(&self, new: NewAttribute) -> Result<Model, ServiceError>;
    async fn update_attribute(&self, attribute: Model) -> Result<Model, ServiceError>;
    async fn delete_attribute(&self, id: i64) -> Result<bool, ServiceError>;
    async fn list_attributes(&self, page: Pagination) -> Result<Page<Model>, ServiceError>;
}
