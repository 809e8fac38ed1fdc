//! Service layer of the EDM backend: business rules over users, documents,
//! document types, attributes and attribute values.
//! - Separates business logic from data access through per-entity repository traits.
//! - Runs every mutating operation in one unit of work, rolled back unless committed.
//! - Reuses validation and entity definitions in `models` crate.
//!
//! ```
//! use std::sync::Arc;
//! use service::{store::MemoryStore, test_support::FixedClock, Services};
//! use service::credentials::mock::PlainPasswordEncoder;
//! use service::attribute::domain::AttributeDraft;
//!
//! let services = Services::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(PlainPasswordEncoder::default()),
//!     FixedClock::fixture().shared(),
//! );
//! let attr = tokio_test::block_on(
//!     services.attributes.create(AttributeDraft { name: "number".into(), data_type: "text".into() }),
//! )
//! .unwrap();
//! assert_eq!(attr.name, "number");
//! ```

use std::sync::Arc;

use mockable::Clock;

pub mod errors;
pub mod store;
pub mod credentials;
pub mod mapper;
pub mod user;
pub mod document;
pub mod document_type;
pub mod attribute;
pub mod attribute_value;
pub mod test_support;

pub use errors::{ServiceError, ValidationErrors};

use attribute::AttributeService;
use attribute_value::AttributeValueService;
use credentials::PasswordEncoder;
use document::DocumentService;
use document_type::DocumentTypeService;
use store::UnitOfWork;
use user::UserService;

/// Every service wired over one store.
pub struct Services<S: UnitOfWork> {
    pub users: UserService<S>,
    pub documents: DocumentService<S>,
    pub document_types: DocumentTypeService<S>,
    pub attributes: AttributeService<S>,
    pub attribute_values: AttributeValueService<S>,
}

impl<S: UnitOfWork> Clone for Services<S> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            documents: self.documents.clone(),
            document_types: self.document_types.clone(),
            attributes: self.attributes.clone(),
            attribute_values: self.attribute_values.clone(),
        }
    }
}

impl<S: UnitOfWork> Services<S> {
    pub fn new(store: Arc<S>, encoder: Arc<dyn PasswordEncoder>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            users: UserService::new(store.clone(), encoder),
            documents: DocumentService::new(store.clone(), clock.clone()),
            document_types: DocumentTypeService::new(store.clone(), clock),
            attributes: AttributeService::new(store.clone()),
            attribute_values: AttributeValueService::new(store),
        }
    }

    pub fn with_max_staleness(mut self, max_staleness: chrono::Duration) -> Self {
        self.documents = self.documents.with_max_staleness(max_staleness);
        self
    }
}
