use serde::Deserialize;

use models::user;

use crate::errors::{ServiceError, ValidationErrors};

/// Input for creating a user. `password` is the raw secret.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDraft {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub password: String,
}

impl UserDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check("login", user::validate_login(&self.login));
        errors.check("email", user::validate_email(&self.email));
        errors.check("first_name", user::validate_name(&self.first_name));
        errors.check("last_name", user::validate_name(&self.last_name));
        errors.check("patronymic", user::validate_name(&self.patronymic));
        errors.check("password", user::validate_password(&self.password));
        errors.into_result()
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub login: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<String>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check_present("login", self.login.as_deref(), user::validate_login);
        errors.check_present("email", self.email.as_deref(), user::validate_email);
        errors.check_present("first_name", self.first_name.as_deref(), user::validate_name);
        errors.check_present("last_name", self.last_name.as_deref(), user::validate_name);
        errors.check_present("patronymic", self.patronymic.as_deref(), user::validate_name);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check("new_password", user::validate_password(&self.new_password));
        errors.into_result()
    }
}
