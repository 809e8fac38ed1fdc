use axum::{extract::State, http::StatusCode};

use common::pagination::Page;
use service::document::domain::{DocumentDraft, DocumentPatch};
use service::mapper::DocumentDto;
use service::store::UnitOfWork;

use super::PageQuery;
use crate::errors::JsonApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/documents", tag = "documents",
    params(PageQuery),
    responses((status = 200, description = "Page of documents", body = crate::openapi::DocumentPageDoc))
)]
pub async fn list<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<DocumentDto>>, JsonApiError> {
    let page = state.services.documents.list(q.into()).await?;
    Ok(Json(page.map(DocumentDto::from)))
}

#[utoipa::path(
    get, path = "/documents/{id}", tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document", body = crate::openapi::DocumentDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentDto>, JsonApiError> {
    Ok(Json(state.services.documents.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/documents", tag = "documents",
    request_body = crate::openapi::DocumentDraftDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DocumentDoc),
        (status = 404, description = "User or document type missing", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Json(draft): Json<DocumentDraft>,
) -> Result<(StatusCode, Json<DocumentDto>), JsonApiError> {
    let doc = state.services.documents.create(draft).await?;
    Ok((StatusCode::CREATED, Json(doc.into())))
}

#[utoipa::path(
    put, path = "/documents/{id}", tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    request_body = crate::openapi::DocumentPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DocumentDoc),
        (status = 400, description = "Wrong Date", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(patch): Json<DocumentPatch>,
) -> Result<Json<DocumentDto>, JsonApiError> {
    Ok(Json(state.services.documents.update(id, patch).await?.into()))
}

#[utoipa::path(
    delete, path = "/documents/{id}", tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.services.documents.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
