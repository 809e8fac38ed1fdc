use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const LOGIN_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub login: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    /// Encoded credential, never the raw password.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Document,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Document => Entity::has_many(crate::document::Entity).into(),
        }
    }
}

impl Related<crate::document::Entity> for Entity {
    fn to() -> RelationDef { Relation::Document.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload; the id is assigned on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub password: String,
}

impl NewUser {
    pub fn into_model(self, id: Uuid) -> Model {
        Model {
            id,
            login: self.login,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            patronymic: self.patronymic,
            password: self.password,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            login: Set(self.login),
            email: Set(self.email),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            patronymic: Set(self.patronymic),
            password: Set(self.password),
        }
    }
}

pub fn validate_login(login: &str) -> Result<(), ModelError> {
    if login.trim().is_empty() {
        return Err(ModelError::Validation("login required".into()));
    }
    if login.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("login must not contain whitespace".into()));
    }
    if login.chars().count() > LOGIN_MAX_LEN {
        return Err(ModelError::Validation(format!("login longer than {LOGIN_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(ModelError::Validation("invalid email".into()));
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(ModelError::Validation(format!("email longer than {EMAIL_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_password(raw: &str) -> Result<(), ModelError> {
    if raw.trim().is_empty() {
        return Err(ModelError::Validation("password required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_local_and_domain() {
        assert!(validate_email("test@test.ru").is_ok());
        assert!(validate_email("test.ru").is_err());
        assert!(validate_email("@test.ru").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn login_rejects_blank_and_spaces() {
        assert!(validate_login("test").is_ok());
        assert!(validate_login("   ").is_err());
        assert!(validate_login("two words").is_err());
        assert!(validate_login(&"x".repeat(LOGIN_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn names_count_characters_not_bytes() {
        assert!(validate_name(&"ж".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let m = NewUser {
            login: "test".into(),
            email: "test@test.ru".into(),
            first_name: "a".into(),
            last_name: "b".into(),
            patronymic: "c".into(),
            password: "secret-hash".into(),
        }
        .into_model(Uuid::new_v4());
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
