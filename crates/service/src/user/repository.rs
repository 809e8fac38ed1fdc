use async_trait::async_trait;
use uuid::Uuid;

use common::pagination::{Page, Pagination};
use models::user::{Model, NewUser};

use crate::errors::ServiceError;

/// Persistence for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<Model>, ServiceError>;
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn user_exists_by_login(&self, login: &str) -> Result<bool, ServiceError>;
    async fn insert_user(&self, new: NewUser) -> Result<Model, ServiceError>;
    async fn update_user(&self, user: Model) -> Result<Model, ServiceError>;
    /// `true` when a row was removed.
    async fn delete_user(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn list_users(&self, page: Pagination) -> Result<Page<Model>, ServiceError>;
}
