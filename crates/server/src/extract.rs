//! Drop-in `Json`, `Path` and `Query` extractors whose rejections render as
//! [`JsonApiError`] instead of axum's plain-text bodies.

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::errors::JsonApiError;

/// Code carried by every error raised before a handler runs.
pub const REQUEST_REJECTED_CODE: u16 = 1000;

fn rejected(status: StatusCode, detail: String) -> JsonApiError {
    let title = status.canonical_reason().unwrap_or("Bad Request");
    JsonApiError { status, error: title, detail: Some(detail), code: Some(REQUEST_REJECTED_CODE) }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self { rejected(rejection.status(), rejection.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self { rejected(rejection.status(), rejection.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self { rejected(rejection.status(), rejection.body_text()) }
}

/// JSON request body; also usable as a response.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response { axum::Json(self.0).into_response() }
}

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    axum::extract::Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}

pub struct Query<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
    axum::extract::Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(parts, state).await?;
        Ok(Query(value))
    }
}
