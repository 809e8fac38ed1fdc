use axum::{extract::State, http::StatusCode};

use service::attribute_value::domain::{AttributeValueDraft, AttributeValueUpdate};
use service::mapper::AttributeValueDto;
use service::store::UnitOfWork;

use crate::errors::JsonApiError;
use crate::extract::{Json, Path};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/attribute-values", tag = "attribute-values",
    request_body = crate::openapi::AttributeValueDraftDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AttributeValueDoc),
        (status = 404, description = "Attribute or document missing", body = crate::openapi::ErrorDoc),
        (status = 422, description = "attribute_id or document_id is null", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Json(draft): Json<AttributeValueDraft>,
) -> Result<(StatusCode, Json<AttributeValueDto>), JsonApiError> {
    let value = state.services.attribute_values.create(draft).await?;
    Ok((StatusCode::CREATED, Json(value)))
}

#[utoipa::path(
    get, path = "/attribute-values/{id}", tag = "attribute-values",
    params(("id" = i64, Path, description = "Attribute value id")),
    responses(
        (status = 200, description = "Attribute value", body = crate::openapi::AttributeValueDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<AttributeValueDto>, JsonApiError> {
    Ok(Json(state.services.attribute_values.get(id).await?))
}

#[utoipa::path(
    put, path = "/attribute-values/{id}", tag = "attribute-values",
    params(("id" = i64, Path, description = "Attribute value id")),
    request_body = crate::openapi::AttributeValueUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AttributeValueDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_value<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(update): Json<AttributeValueUpdate>,
) -> Result<Json<AttributeValueDto>, JsonApiError> {
    Ok(Json(state.services.attribute_values.update_value(id, update).await?))
}

#[utoipa::path(
    delete, path = "/attribute-values/{id}", tag = "attribute-values",
    params(("id" = i64, Path, description = "Attribute value id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.services.attribute_values.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/documents/{id}/attribute-values", tag = "attribute-values",
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 200, description = "Values attached to the document", body = [crate::openapi::AttributeValueDoc]),
        (status = 404, description = "Document not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_by_document<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<AttributeValueDto>>, JsonApiError> {
    Ok(Json(state.services.attribute_values.list_by_document(id).await?))
}
