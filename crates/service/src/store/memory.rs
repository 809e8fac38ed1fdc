//! In-memory store with staged-copy transactions.
//!
//! Used by unit tests, doc examples and router tests. Unique login/email are
//! enforced the way the database's unique indexes would.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use common::pagination::{Page, Pagination};
use models::{attribute, attribute_value, document, document_type, user};

use super::{check_page, Transaction, UnitOfWork};
use crate::attribute::repository::AttributeRepository;
use crate::attribute_value::repository::AttributeValueRepository;
use crate::document::repository::DocumentRepository;
use crate::document_type::repository::DocumentTypeRepository;
use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

#[derive(Clone, Debug, Default)]
struct MemoryState {
    users: BTreeMap<Uuid, user::Model>,
    documents: BTreeMap<i64, document::Model>,
    document_types: BTreeMap<i64, document_type::Model>,
    document_type_attributes: BTreeMap<i64, Vec<i64>>,
    attributes: BTreeMap<i64, attribute::Model>,
    attribute_values: BTreeMap<i64, attribute_value::Model>,
    next_id: i64,
    writes: u64,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_unique_user(&self, candidate: &user::Model) -> Result<(), ServiceError> {
        for other in self.users.values().filter(|u| u.id != candidate.id) {
            if other.email == candidate.email {
                return Err(ServiceError::conflict("user", "email", &candidate.email));
            }
            if other.login == candidate.login {
                return Err(ServiceError::conflict("user", "login", &candidate.login));
            }
        }
        Ok(())
    }
}

/// A store handle. The root handle reads and writes committed state directly;
/// a handle returned by [`UnitOfWork::begin`] works on a private copy.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    committed: Arc<Mutex<MemoryState>>,
    staged: Arc<Mutex<MemoryState>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        let state = Arc::new(Mutex::new(MemoryState::default()));
        Self { committed: state.clone(), staged: state }
    }
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>, ServiceError> {
        self.staged.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }

    /// Number of committed writes, for asserting that a rejected call wrote nothing.
    pub fn write_count(&self) -> u64 {
        self.committed.lock().map(|s| s.writes).unwrap_or_default()
    }

    fn write<T>(&self, f: impl FnOnce(&mut MemoryState) -> Result<T, ServiceError>) -> Result<T, ServiceError> {
        let mut state = self.state()?;
        let out = f(&mut state)?;
        state.writes += 1;
        Ok(out)
    }
}

#[async_trait]
impl UnitOfWork for MemoryStore {
    type Tx = MemoryStore;

    async fn begin(&self) -> Result<Self::Tx, ServiceError> {
        let snapshot = self
            .committed
            .lock()
            .map_err(|_| ServiceError::Db("memory store lock poisoned".into()))?
            .clone();
        Ok(MemoryStore { committed: self.committed.clone(), staged: Arc::new(Mutex::new(snapshot)) })
    }
}

#[async_trait]
impl Transaction for MemoryStore {
    async fn commit(self) -> Result<(), ServiceError> {
        if Arc::ptr_eq(&self.committed, &self.staged) {
            return Ok(());
        }
        let staged = self.state()?.clone();
        let mut committed = self
            .committed
            .lock()
            .map_err(|_| ServiceError::Db("memory store lock poisoned".into()))?;
        *committed = staged;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        Ok(self.state()?.users.get(&id).cloned())
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.state()?.users.values().any(|u| u.email == email))
    }

    async fn user_exists_by_login(&self, login: &str) -> Result<bool, ServiceError> {
        Ok(self.state()?.users.values().any(|u| u.login == login))
    }

    async fn insert_user(&self, new: user::NewUser) -> Result<user::Model, ServiceError> {
        self.write(|s| {
            let model = new.into_model(Uuid::new_v4());
            s.check_unique_user(&model)?;
            s.users.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn update_user(&self, model: user::Model) -> Result<user::Model, ServiceError> {
        self.write(|s| {
            if !s.users.contains_key(&model.id) {
                return Err(ServiceError::not_found("user", model.id));
            }
            s.check_unique_user(&model)?;
            s.users.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.write(|s| {
            if s.documents.values().any(|d| d.user_id == id) {
                return Err(ServiceError::Conflict(format!("user {id} is still referenced by documents")));
            }
            Ok(s.users.remove(&id).is_some())
        })
    }

    async fn list_users(&self, page: Pagination) -> Result<Page<user::Model>, ServiceError> {
        check_page(page)?;
        let mut all: Vec<_> = self.state()?.users.values().cloned().collect();
        all.sort_by(|a, b| a.login.cmp(&b.login));
        Ok(Page::from_vec(all, page))
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn find_document(&self, id: i64) -> Result<Option<document::Model>, ServiceError> {
        Ok(self.state()?.documents.get(&id).cloned())
    }

    async fn insert_document(&self, new: document::NewDocument) -> Result<document::Model, ServiceError> {
        self.write(|s| {
            let model = new.into_model(s.next_id());
            s.documents.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn update_document(&self, model: document::Model) -> Result<document::Model, ServiceError> {
        self.write(|s| match s.documents.get_mut(&model.id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(ServiceError::not_found("document", model.id)),
        })
    }

    async fn delete_document(&self, id: i64) -> Result<bool, ServiceError> {
        self.write(|s| {
            let removed = s.documents.remove(&id).is_some();
            if removed {
                s.attribute_values.retain(|_, v| v.document_id != id);
            }
            Ok(removed)
        })
    }

    async fn list_documents(&self, page: Pagination) -> Result<Page<document::Model>, ServiceError> {
        check_page(page)?;
        let all: Vec<_> = self.state()?.documents.values().cloned().collect();
        Ok(Page::from_vec(all, page))
    }
}

#[async_trait]
impl DocumentTypeRepository for MemoryStore {
    async fn find_document_type(&self, id: i64) -> Result<Option<document_type::Model>, ServiceError> {
        Ok(self.state()?.document_types.get(&id).cloned())
    }

    async fn document_type_attributes(&self, id: i64) -> Result<Vec<attribute::Model>, ServiceError> {
        let s = self.state()?;
        let ids = s.document_type_attributes.get(&id).map(Vec::as_slice).unwrap_or_default();
        Ok(ids.iter().filter_map(|a| s.attributes.get(a).cloned()).collect())
    }

    async fn insert_document_type(
        &self,
        new: document_type::NewDocumentType,
        attribute_ids: &[i64],
    ) -> Result<document_type::Model, ServiceError> {
        self.write(|s| {
            let model = new.into_model(s.next_id());
            s.document_types.insert(model.id, model.clone());
            s.document_type_attributes.insert(model.id, attribute_ids.to_vec());
            Ok(model)
        })
    }

    async fn update_document_type(
        &self,
        model: document_type::Model,
        attribute_ids: Option<&[i64]>,
    ) -> Result<document_type::Model, ServiceError> {
        self.write(|s| {
            if !s.document_types.contains_key(&model.id) {
                return Err(ServiceError::not_found("document type", model.id));
            }
            if let Some(ids) = attribute_ids {
                s.document_type_attributes.insert(model.id, ids.to_vec());
            }
            s.document_types.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn delete_document_type(&self, id: i64) -> Result<bool, ServiceError> {
        self.write(|s| {
            if s.documents.values().any(|d| d.document_type_id == id) {
                return Err(ServiceError::Conflict(format!("document type {id} is still referenced by documents")));
            }
            s.document_type_attributes.remove(&id);
            Ok(s.document_types.remove(&id).is_some())
        })
    }

    async fn list_document_types(&self, page: Pagination) -> Result<Page<document_type::Model>, ServiceError> {
        check_page(page)?;
        let all: Vec<_> = self.state()?.document_types.values().cloned().collect();
        Ok(Page::from_vec(all, page))
    }
}

#[async_trait]
impl AttributeRepository for MemoryStore {
    async fn find_attribute(&self, id: i64) -> Result<Option<attribute::Model>, ServiceError> {
        Ok(self.state()?.attributes.get(&id).cloned())
    }

    async fn insert_attribute(&self, new: attribute::NewAttribute) -> Result<attribute::Model, ServiceError> {
        self.write(|s| {
            let model = new.into_model(s.next_id());
            s.attributes.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn update_attribute(&self, model: attribute::Model) -> Result<attribute::Model, ServiceError> {
        self.write(|s| match s.attributes.get_mut(&model.id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(ServiceError::not_found("attribute", model.id)),
        })
    }

    async fn delete_attribute(&self, id: i64) -> Result<bool, ServiceError> {
        self.write(|s| {
            let removed = s.attributes.remove(&id).is_some();
            if removed {
                for ids in s.document_type_attributes.values_mut() {
                    ids.retain(|a| *a != id);
                }
                s.attribute_values.retain(|_, v| v.attribute_id != id);
            }
            Ok(removed)
        })
    }

    async fn list_attributes(&self, page: Pagination) -> Result<Page<attribute::Model>, ServiceError> {
        check_page(page)?;
        let all: Vec<_> = self.state()?.attributes.values().cloned().collect();
        Ok(Page::from_vec(all, page))
    }
}

#[async_trait]
impl AttributeValueRepository for MemoryStore {
    async fn find_attribute_value(&self, id: i64) -> Result<Option<attribute_value::Model>, ServiceError> {
        Ok(self.state()?.attribute_values.get(&id).cloned())
    }

    async fn insert_attribute_value(
        &self,
        new: attribute_value::NewAttributeValue,
    ) -> Result<attribute_value::Model, ServiceError> {
        self.write(|s| {
            let model = new.into_model(s.next_id());
            s.attribute_values.insert(model.id, model.clone());
            Ok(model)
        })
    }

    async fn update_attribute_value(
        &self,
        model: attribute_value::Model,
    ) -> Result<attribute_value::Model, ServiceError> {
        self.write(|s| match s.attribute_values.get_mut(&model.id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(ServiceError::not_found("attribute value", model.id)),
        })
    }

    async fn delete_attribute_value(&self, id: i64) -> Result<bool, ServiceError> {
        self.write(|s| Ok(s.attribute_values.remove(&id).is_some()))
    }

    async fn list_attribute_values_by_document(
        &self,
        document_id: i64,
    ) -> Result<Vec<attribute_value::Model>, ServiceError> {
        Ok(self
            .state()?
            .attribute_values
            .values()
            .filter(|v| v.document_id == document_id)
            .cloned()
            .collect())
    }
}
