use std::sync::Arc;

use tracing::{info, instrument};

use common::pagination::{Page, Pagination};
use models::attribute::NewAttribute;

use super::domain::{AttributeDraft, AttributePatch};
use super::repository::AttributeRepository;
use crate::errors::ServiceError;
use crate::mapper::AttributeDto;
use crate::store::{Transaction, UnitOfWork};

pub struct AttributeService<S: UnitOfWork> {
    store: Arc<S>,
}

impl<S: UnitOfWork> Clone for AttributeService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

impl<S: UnitOfWork> AttributeService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<Page<AttributeDto>, ServiceError> {
        Ok(self.store.list_attributes(page).await?.map(AttributeDto::from))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<AttributeDto, ServiceError> {
        let attr = self.store.find_attribute(id).await?.ok_or_else(|| ServiceError::not_found("attribute", id))?;
        Ok(attr.into())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: AttributeDraft) -> Result<AttributeDto, ServiceError> {
        draft.validate()?;
        let tx = self.store.begin().await?;
        let attr = tx.insert_attribute(NewAttribute { name: draft.name, data_type: draft.data_type }).await?;
        tx.commit().await?;
        info!(attribute_id = attr.id, "attribute_created");
        Ok(attr.into())
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: AttributePatch) -> Result<AttributeDto, ServiceError> {
        patch.validate()?;
        let tx = self.store.begin().await?;
        let mut attr = tx.find_attribute(id).await?.ok_or_else(|| ServiceError::not_found("attribute", id))?;
        if let Some(name) = patch.name {
            attr.name = name;
        }
        if let Some(data_type) = patch.data_type {
            attr.data_type = data_type;
        }
        let attr = tx.update_attribute(attr).await?;
        tx.commit().await?;
        Ok(attr.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let tx = self.store.begin().await?;
        if !tx.delete_attribute(id).await? {
            return Err(ServiceError::not_found("attribute", id));
        }
        tx.commit().await?;
        info!(attribute_id = id, "attribute_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn svc() -> AttributeService<MemoryStore> { AttributeService::new(Arc::new(MemoryStore::new())) }

    #[tokio::test]
    async fn crud_round() {
        let svc = svc();
        let created = svc.create(AttributeDraft { name: "number".into(), data_type: "text".into() }).await.unwrap();
        assert_eq!(svc.get(created.id).await.unwrap(), created);

        let patch = AttributePatch { data_type: Some("integer".into()), ..Default::default() };
        let updated = svc.update(created.id, patch).await.unwrap();
        assert_eq!(updated.name, "number");
        assert_eq!(updated.data_type, "integer");

        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn overlong_name_is_a_validation_error() {
        let draft = AttributeDraft { name: "n".repeat(300), data_type: "text".into() };
        let err = svc().create(draft).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_requires_name_and_type() {
        let err = svc().create(AttributeDraft { name: "".into(), data_type: "".into() }).await.unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "data_type"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_is_paginated() {
        let svc = svc();
        for i in 0..5 {
            svc.create(AttributeDraft { name: format!("a{i}"), data_type: "text".into() }).await.unwrap();
        }
        let page = svc.list(Pagination::new(2, 2)).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "a4");
    }
}
