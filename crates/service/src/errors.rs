use std::fmt;

use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("wrong date: {0}")]
    WrongDate(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    pub fn conflict(entity: &str, field: &str, value: &str) -> Self {
        Self::Conflict(format!("{entity} with {field} '{value}' already exists"))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::InvalidCredentials => 1004,
            ServiceError::WrongDate(_) => 1005,
            ServiceError::Hash(_) => 1101,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        // constraint violations raised by the schema surface as conflicts
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return ServiceError::Conflict(detail);
            }
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(what) => ServiceError::NotFound(what),
            DbErr::RecordNotUpdated => ServiceError::NotFound("record to update not found".into()),
            other => ServiceError::Db(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self { ServiceError::Validation(errors) }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError { field: field.to_string(), message: message.into() });
    }

    /// Record the outcome of a model validator under `field`.
    pub fn check(&mut self, field: &str, result: Result<(), ModelError>) {
        if let Err(ModelError::Validation(message)) = result {
            self.add(field, message);
        }
    }

    /// Run `validate` only when the optional field is present.
    pub fn check_present<T: ?Sized>(
        &mut self,
        field: &str,
        value: Option<&T>,
        validate: impl FnOnce(&T) -> Result<(), ModelError>,
    ) {
        if let Some(v) = value {
            self.check(field, validate(v));
        }
    }

    pub fn require<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.add(field, "must not be null");
        }
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn errors(&self) -> &[FieldError] { &self.0 }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() { Ok(()) } else { Err(ServiceError::Validation(self)) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_collect_every_field() {
        let mut errors = ValidationErrors::new();
        errors.check("login", models::user::validate_login(""));
        errors.check("email", models::user::validate_email("nope"));
        errors.check("first_name", models::user::validate_name("Ivan"));
        errors.require::<i64>("attribute_id", None);

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["login", "email", "attribute_id"]);
        assert_eq!(
            errors.to_string(),
            "login: login required; email: invalid email; attribute_id: must not be null"
        );
        assert!(matches!(errors.into_result(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn empty_validation_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn codes_are_distinct() {
        let all = [
            ServiceError::Validation(ValidationErrors::new()),
            ServiceError::NotFound(String::new()),
            ServiceError::Conflict(String::new()),
            ServiceError::InvalidCredentials,
            ServiceError::WrongDate(String::new()),
            ServiceError::Hash(String::new()),
            ServiceError::Db(String::new()),
        ];
        let mut codes: Vec<u16> = all.iter().map(ServiceError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn record_not_updated_maps_to_not_found() {
        assert!(matches!(ServiceError::from(DbErr::RecordNotUpdated), ServiceError::NotFound(_)));
        assert!(matches!(ServiceError::from(DbErr::Custom("boom".into())), ServiceError::Db(_)));
    }
}
