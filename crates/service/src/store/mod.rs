//! Keyed store abstraction shared by every service.
//!
//! Each entity has its own repository trait (see the `repository` module of
//! the matching service). A store implements all of them; a unit of work
//! hands out a transaction that implements them too and is rolled back
//! unless [`Transaction::commit`] is called.

use async_trait::async_trait;

use common::pagination::Pagination;

use crate::attribute::repository::AttributeRepository;
use crate::attribute_value::repository::AttributeValueRepository;
use crate::document::repository::DocumentRepository;
use crate::document_type::repository::DocumentTypeRepository;
use crate::errors::{ServiceError, ValidationErrors};
use crate::user::repository::UserRepository;

pub mod memory;
pub mod seaorm;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;

/// Everything a service may read or write.
pub trait EdmRepositories:
    UserRepository + DocumentRepository + DocumentTypeRepository + AttributeRepository + AttributeValueRepository
{
}

impl<T> EdmRepositories for T where
    T: UserRepository
        + DocumentRepository
        + DocumentTypeRepository
        + AttributeRepository
        + AttributeValueRepository
        + ?Sized
{
}

/// A pending set of writes. Dropping it without `commit` discards them.
#[async_trait]
pub trait Transaction: EdmRepositories + Sized {
    async fn commit(self) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait UnitOfWork: EdmRepositories + 'static {
    type Tx: Transaction;

    async fn begin(&self) -> Result<Self::Tx, ServiceError>;
}

/// Rejects a page whose offset does not fit the database's offset type.
pub(crate) fn check_page(page: Pagination) -> Result<(), ServiceError> {
    let mut errors = ValidationErrors::new();
    if page.checked_offset().is_none() {
        errors.add("page", "page index out of range");
    }
    errors.into_result()
}
