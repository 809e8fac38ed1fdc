use std::sync::Arc;

use mockable::Clock;
use tracing::{info, instrument};

use common::pagination::{Page, Pagination};
use models::{attribute, document_type::NewDocumentType};

use super::domain::{DocumentTypeDraft, DocumentTypePatch};
use super::repository::DocumentTypeRepository;
use crate::attribute::repository::AttributeRepository;
use crate::errors::ServiceError;
use crate::mapper::DocumentTypeDto;
use crate::store::{EdmRepositories, Transaction, UnitOfWork};

pub struct DocumentTypeService<S: UnitOfWork> {
    store: Arc<S>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<S: UnitOfWork> Clone for DocumentTypeService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone(), clock: self.clock.clone() } }
}

/// Load every referenced attribute, preserving the requested order.
async fn resolve_attributes<R: EdmRepositories + ?Sized>(
    repo: &R,
    ids: &[i64],
) -> Result<Vec<attribute::Model>, ServiceError> {
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        let attr = repo.find_attribute(*id).await?.ok_or_else(|| ServiceError::not_found("attribute", id))?;
        found.push(attr);
    }
    Ok(found)
}

impl<S: UnitOfWork> DocumentTypeService<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock + Send + Sync>) -> Self { Self { store, clock } }

    #[instrument(skip(self))]
    pub async fn list(&self, opts: Pagination) -> Result<Page<DocumentTypeDto>, ServiceError> {
        let page = self.store.list_document_types(opts).await?;
        let mut schemas = Vec::with_capacity(page.items.len());
        for dt in &page.items {
            schemas.push(self.store.document_type_attributes(dt.id).await?);
        }
        let mut schemas = schemas.into_iter();
        Ok(page.map(|dt| DocumentTypeDto::from((dt, schemas.next().unwrap_or_default()))))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<DocumentTypeDto, ServiceError> {
        let dt = self
            .store
            .find_document_type(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("document type", id))?;
        let attributes = self.store.document_type_attributes(id).await?;
        Ok((dt, attributes).into())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: DocumentTypeDraft) -> Result<DocumentTypeDto, ServiceError> {
        draft.validate()?;
        let tx = self.store.begin().await?;
        let attributes = resolve_attributes(&tx, &draft.attribute_ids).await?;
        let dt = tx
            .insert_document_type(
                NewDocumentType { name: draft.name, description: draft.description, created_at: self.clock.utc().into() },
                &draft.attribute_ids,
            )
            .await?;
        tx.commit().await?;
        info!(document_type_id = dt.id, attributes = attributes.len(), "document_type_created");
        Ok((dt, attributes).into())
    }

    /// `attribute_ids`, when present, replaces the whole schema.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: DocumentTypePatch) -> Result<DocumentTypeDto, ServiceError> {
        patch.validate()?;
        let tx = self.store.begin().await?;
        let mut dt = tx
            .find_document_type(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("document type", id))?;
        if let Some(ids) = &patch.attribute_ids {
            resolve_attributes(&tx, ids).await?;
        }
        if let Some(name) = patch.name {
            dt.name = name;
        }
        if let Some(description) = patch.description {
            dt.description = description;
        }

        let dt = tx.update_document_type(dt, patch.attribute_ids.as_deref()).await?;
        let attributes = tx.document_type_attributes(dt.id).await?;
        tx.commit().await?;
        info!(document_type_id = dt.id, "document_type_updated");
        Ok((dt, attributes).into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let tx = self.store.begin().await?;
        if !tx.delete_document_type(id).await? {
            return Err(ServiceError::not_found("document type", id));
        }
        tx.commit().await?;
        info!(document_type_id = id, "document_type_deleted");
        Ok(())
    }
}
