use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use common::pagination::{Page, Pagination};
use models::user::NewUser;

use super::domain::{PasswordChange, UserDraft, UserPatch};
use super::repository::UserRepository;
use crate::credentials::PasswordEncoder;
use crate::errors::ServiceError;
use crate::mapper::UserDto;
use crate::store::{Transaction, UnitOfWork};

/// User business service independent of web framework
pub struct UserService<S: UnitOfWork> {
    store: Arc<S>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl<S: UnitOfWork> Clone for UserService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone(), encoder: self.encoder.clone() } }
}

impl<S: UnitOfWork> UserService<S> {
    pub fn new(store: Arc<S>, encoder: Arc<dyn PasswordEncoder>) -> Self { Self { store, encoder } }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<Page<UserDto>, ServiceError> {
        Ok(self.store.list_users(page).await?.map(UserDto::from))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<UserDto, ServiceError> {
        let user = self.store.find_user(id).await?.ok_or_else(|| ServiceError::not_found("user", id))?;
        Ok(user.into())
    }

    /// Register a new user with an encoded password.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::credentials::mock::PlainPasswordEncoder;
    /// use service::store::MemoryStore;
    /// use service::user::{domain::UserDraft, UserService};
    ///
    /// let svc = UserService::new(Arc::new(MemoryStore::new()), Arc::new(PlainPasswordEncoder::default()));
    /// let draft = UserDraft {
    ///     login: "test".into(),
    ///     email: "test@test.ru".into(),
    ///     first_name: "Ivan".into(),
    ///     last_name: "Ivanov".into(),
    ///     patronymic: "Ivanovich".into(),
    ///     password: "Passw0rd".into(),
    /// };
    /// let user = tokio_test::block_on(svc.create(draft)).unwrap();
    /// assert_eq!(user.login, "test");
    /// ```
    #[instrument(skip(self, draft), fields(login = %draft.login, email = %draft.email))]
    pub async fn create(&self, draft: UserDraft) -> Result<UserDto, ServiceError> {
        draft.validate()?;
        let tx = self.store.begin().await?;
        if tx.user_exists_by_email(&draft.email).await? {
            debug!("email taken");
            return Err(ServiceError::conflict("user", "email", &draft.email));
        }
        if tx.user_exists_by_login(&draft.login).await? {
            debug!("login taken");
            return Err(ServiceError::conflict("user", "login", &draft.login));
        }

        let password = self.encoder.encode(&draft.password)?;
        let user = tx
            .insert_user(NewUser {
                login: draft.login,
                email: draft.email,
                first_name: draft.first_name,
                last_name: draft.last_name,
                patronymic: draft.patronymic,
                password,
            })
            .await?;
        tx.commit().await?;
        info!(user_id = %user.id, login = %user.login, "user_created");
        Ok(user.into())
    }

    /// Apply the present fields of `patch`. Uniqueness is re-checked only for
    /// an email or login that actually changes.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserDto, ServiceError> {
        patch.validate()?;
        let tx = self.store.begin().await?;
        let mut user = tx.find_user(id).await?.ok_or_else(|| ServiceError::not_found("user", id))?;

        if let Some(email) = patch.email {
            if email != user.email {
                if tx.user_exists_by_email(&email).await? {
                    return Err(ServiceError::conflict("user", "email", &email));
                }
                user.email = email;
            }
        }
        if let Some(login) = patch.login {
            if login != user.login {
                if tx.user_exists_by_login(&login).await? {
                    return Err(ServiceError::conflict("user", "login", &login));
                }
                user.login = login;
            }
        }
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(patronymic) = patch.patronymic {
            user.patronymic = patronymic;
        }

        let user = tx.update_user(user).await?;
        tx.commit().await?;
        info!(user_id = %user.id, "user_updated");
        Ok(user.into())
    }

    #[instrument(skip(self, change))]
    pub async fn update_password(&self, id: Uuid, change: PasswordChange) -> Result<(), ServiceError> {
        change.validate()?;
        let tx = self.store.begin().await?;
        let mut user = tx.find_user(id).await?.ok_or_else(|| ServiceError::not_found("user", id))?;
        if !self.encoder.matches(&change.old_password, &user.password) {
            return Err(ServiceError::InvalidCredentials);
        }
        user.password = self.encoder.encode(&change.new_password)?;
        tx.update_user(user).await?;
        tx.commit().await?;
        info!(user_id = %id, "user_password_changed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let tx = self.store.begin().await?;
        if !tx.delete_user(id).await? {
            return Err(ServiceError::not_found("user", id));
        }
        tx.commit().await?;
        info!(user_id = %id, "user_deleted");
        Ok(())
    }
}
