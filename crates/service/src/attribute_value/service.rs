use std::sync::Arc;

use tracing::{info, instrument};

use models::attribute_value::NewAttributeValue;

use super::domain::{AttributeValueDraft, AttributeValueUpdate};
use super::repository::AttributeValueRepository;
use crate::attribute::repository::AttributeRepository;
use crate::document::repository::DocumentRepository;
use crate::errors::ServiceError;
use crate::mapper::AttributeValueDto;
use crate::store::{Transaction, UnitOfWork};

pub struct AttributeValueService<S: UnitOfWork> {
    store: Arc<S>,
}

impl<S: UnitOfWork> Clone for AttributeValueService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

impl<S: UnitOfWork> AttributeValueService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Attach a value to a document. Both ids are required; `value` may be null.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: AttributeValueDraft) -> Result<AttributeValueDto, ServiceError> {
        let (attribute_id, document_id) = draft.validate()?;
        let tx = self.store.begin().await?;
        if tx.find_attribute(attribute_id).await?.is_none() {
            return Err(ServiceError::not_found("attribute", attribute_id));
        }
        if tx.find_document(document_id).await?.is_none() {
            return Err(ServiceError::not_found("document", document_id));
        }
        let value = tx.insert_attribute_value(NewAttributeValue { attribute_id, document_id, value: draft.value }).await?;
        tx.commit().await?;
        info!(attribute_value_id = value.id, attribute_id, document_id, "attribute_value_created");
        Ok(value.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<AttributeValueDto, ServiceError> {
        let value = self
            .store
            .find_attribute_value(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("attribute value", id))?;
        Ok(value.into())
    }

    #[instrument(skip(self, update))]
    pub async fn update_value(&self, id: i64, update: AttributeValueUpdate) -> Result<AttributeValueDto, ServiceError> {
        let tx = self.store.begin().await?;
        let mut current = tx
            .find_attribute_value(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("attribute value", id))?;
        current.value = update.value;
        let updated = tx.update_attribute_value(current).await?;
        tx.commit().await?;
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let tx = self.store.begin().await?;
        if !tx.delete_attribute_value(id).await? {
            return Err(ServiceError::not_found("attribute value", id));
        }
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_by_document(&self, document_id: i64) -> Result<Vec<AttributeValueDto>, ServiceError> {
        if self.store.find_document(document_id).await?.is_none() {
            return Err(ServiceError::not_found("document", document_id));
        }
        let values = self.store.list_attribute_values_by_document(document_id).await?;
        Ok(values.into_iter().map(AttributeValueDto::from).collect())
    }
}
