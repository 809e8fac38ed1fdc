use axum::{extract::State, http::StatusCode};

use common::pagination::Page;
use service::document_type::domain::{DocumentTypeDraft, DocumentTypePatch};
use service::mapper::DocumentTypeDto;
use service::store::UnitOfWork;

use super::PageQuery;
use crate::errors::JsonApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/document-types", tag = "document-types",
    params(PageQuery),
    responses((status = 200, description = "Page of document types", body = crate::openapi::DocumentTypePageDoc))
)]
pub async fn list<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<DocumentTypeDto>>, JsonApiError> {
    Ok(Json(state.services.document_types.list(q.into()).await?))
}

#[utoipa::path(
    get, path = "/document-types/{id}", tag = "document-types",
    params(("id" = i64, Path, description = "Document type id")),
    responses(
        (status = 200, description = "Document type", body = crate::openapi::DocumentTypeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentTypeDto>, JsonApiError> {
    Ok(Json(state.services.document_types.get(id).await?))
}

#[utoipa::path(
    post, path = "/document-types", tag = "document-types",
    request_body = crate::openapi::DocumentTypeDraftDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DocumentTypeDoc),
        (status = 404, description = "Unknown attribute", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Json(draft): Json<DocumentTypeDraft>,
) -> Result<(StatusCode, Json<DocumentTypeDto>), JsonApiError> {
    let dt = state.services.document_types.create(draft).await?;
    Ok((StatusCode::CREATED, Json(dt)))
}

#[utoipa::path(
    put, path = "/document-types/{id}", tag = "document-types",
    params(("id" = i64, Path, description = "Document type id")),
    request_body = crate::openapi::DocumentTypePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DocumentTypeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(patch): Json<DocumentTypePatch>,
) -> Result<Json<DocumentTypeDto>, JsonApiError> {
    Ok(Json(state.services.document_types.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/document-types/{id}", tag = "document-types",
    params(("id" = i64, Path, description = "Document type id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.services.document_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
