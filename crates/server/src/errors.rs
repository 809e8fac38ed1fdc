use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use service::ServiceError;

/// JSON error body: `{"error": <title>, "detail": <message>, "code": <numeric code>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail, code: None }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid Credentials"),
            ServiceError::WrongDate(_) => (StatusCode::BAD_REQUEST, "Wrong Date"),
            ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation Error"),
            ServiceError::Hash(_) | ServiceError::Db(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        let detail = match &e {
            ServiceError::Validation(errors) => errors.to_string(),
            ServiceError::NotFound(msg) | ServiceError::Conflict(msg) | ServiceError::WrongDate(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self { status, error: title, detail: Some(detail), code: Some(e.code()) }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        } else {
            warn!(status = %self.status, detail = ?self.detail, "request rejected");
        }
        let body = ErrorBody { error: self.error, detail: self.detail.as_deref(), code: self.code };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::ValidationErrors;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ServiceError::WrongDate("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Validation(ValidationErrors::new()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let code = err.code();
            let api = JsonApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.code, Some(code));
        }
    }

    #[test]
    fn not_found_detail_is_the_bare_message() {
        let api = JsonApiError::from(ServiceError::not_found("user", 7));
        assert_eq!(api.detail.as_deref(), Some("user 7 not found"));
    }
}
