use axum::{extract::State, http::StatusCode};

use common::pagination::Page;
use service::attribute::domain::{AttributeDraft, AttributePatch};
use service::mapper::AttributeDto;
use service::store::UnitOfWork;

use super::PageQuery;
use crate::errors::JsonApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/attributes", tag = "attributes",
    params(PageQuery),
    responses((status = 200, description = "Page of attributes", body = crate::openapi::AttributePageDoc))
)]
pub async fn list<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<AttributeDto>>, JsonApiError> {
    Ok(Json(state.services.attributes.list(q.into()).await?))
}

#[utoipa::path(
    get, path = "/attributes/{id}", tag = "attributes",
    params(("id" = i64, Path, description = "Attribute id")),
    responses(
        (status = 200, description = "Attribute", body = crate::openapi::AttributeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<AttributeDto>, JsonApiError> {
    Ok(Json(state.services.attributes.get(id).await?))
}

#[utoipa::path(
    post, path = "/attributes", tag = "attributes",
    request_body = crate::openapi::AttributeDraftDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AttributeDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Json(draft): Json<AttributeDraft>,
) -> Result<(StatusCode, Json<AttributeDto>), JsonApiError> {
    let attr = state.services.attributes.create(draft).await?;
    Ok((StatusCode::CREATED, Json(attr)))
}

#[utoipa::path(
    put, path = "/attributes/{id}", tag = "attributes",
    params(("id" = i64, Path, description = "Attribute id")),
    request_body = crate::openapi::AttributePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AttributeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(patch): Json<AttributePatch>,
) -> Result<Json<AttributeDto>, JsonApiError> {
    Ok(Json(state.services.attributes.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/attributes/{id}", tag = "attributes",
    params(("id" = i64, Path, description = "Attribute id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.services.attributes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
