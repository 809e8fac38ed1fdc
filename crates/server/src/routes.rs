use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use common::{pagination::Pagination, types::Health};
use service::store::UnitOfWork;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod users;
pub mod documents;
pub mod document_types;
pub mod attributes;
pub mod attribute_values;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `?page=&size=` on list endpoints; page is 0-based.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl From<PageQuery> for Pagination {
    fn from(q: PageQuery) -> Self {
        let default = Pagination::default();
        Pagination::new(q.page.unwrap_or(default.page), q.size.unwrap_or(default.size))
    }
}

/// Build the full application router over any store.
pub fn build_router<S: UnitOfWork>(state: AppState<S>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/users", get(users::list::<S>).post(users::create::<S>))
        .route("/users/:id", get(users::get::<S>).put(users::update::<S>).delete(users::delete::<S>))
        .route("/users/:id/password", put(users::update_password::<S>))
        .route("/documents", get(documents::list::<S>).post(documents::create::<S>))
        .route(
            "/documents/:id",
            get(documents::get::<S>).put(documents::update::<S>).delete(documents::delete::<S>),
        )
        .route("/documents/:id/attribute-values", get(attribute_values::list_by_document::<S>))
        .route("/document-types", get(document_types::list::<S>).post(document_types::create::<S>))
        .route(
            "/document-types/:id",
            get(document_types::get::<S>).put(document_types::update::<S>).delete(document_types::delete::<S>),
        )
        .route("/attributes", get(attributes::list::<S>).post(attributes::create::<S>))
        .route(
            "/attributes/:id",
            get(attributes::get::<S>).put(attributes::update::<S>).delete(attributes::delete::<S>),
        )
        .route("/attribute-values", post(attribute_values::create::<S>))
        .route(
            "/attribute-values/:id",
            get(attribute_values::get::<S>)
                .put(attribute_values::update_value::<S>)
                .delete(attribute_values::delete::<S>),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
