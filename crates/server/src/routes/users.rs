use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use common::pagination::Page;
use service::mapper::UserDto;
use service::store::UnitOfWork;
use service::user::domain::{PasswordChange, UserDraft, UserPatch};

use super::PageQuery;
use crate::errors::JsonApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/users", tag = "users",
    params(PageQuery),
    responses((status = 200, description = "Page of users", body = crate::openapi::UserPageDoc))
)]
pub async fn list<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<UserDto>>, JsonApiError> {
    Ok(Json(state.services.users.list(q.into()).await?))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.services.users.get(id).await?))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserDraftDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 409, description = "Email or login taken", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<UserDto>), JsonApiError> {
    let user = state.services.users.create(draft).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = crate::openapi::UserPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email or login taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.services.users.update(id, patch).await?))
}

#[utoipa::path(
    put, path = "/users/{id}/password", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = crate::openapi::PasswordChangeDoc,
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Old password does not match", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_password<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(change): Json<PasswordChange>,
) -> Result<StatusCode, JsonApiError> {
    state.services.users.update_password(id, change).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete<S: UnitOfWork>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
