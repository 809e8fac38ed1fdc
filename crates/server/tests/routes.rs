//! Router-level tests over the in-memory store.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use mockable::Clock;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{routes, state::AppState};
use service::credentials::mock::PlainPasswordEncoder;
use service::store::MemoryStore;
use service::test_support::FixedClock;
use service::Services;

fn app() -> Router {
    let services = Services::new(
        Arc::new(MemoryStore::new()),
        Arc::new(PlainPasswordEncoder::default()),
        FixedClock::fixture().shared(),
    );
    routes::build_router(AppState::new(services), CorsLayer::very_permissive())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

fn user_body(login: &str, email: &str) -> Value {
    json!({
        "login": login,
        "email": email,
        "first_name": "Ivan",
        "last_name": "Ivanov",
        "patronymic": "Ivanovich",
        "password": "Passw0rd"
    })
}

#[tokio::test]
async fn health_ok() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(&app(), "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users/{id}").is_some());
    assert!(body["paths"].get("/documents/{id}/attribute-values").is_some());
}

#[tokio::test]
async fn user_crud_over_http() {
    let app = app();
    let (status, created) = send(&app, "POST", "/users", Some(user_body("test", "test@test.ru"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("password").is_none());
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "POST", "/users", Some(user_body("other", "test@test.ru"))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = send(&app, "PUT", &format!("/users/{id}"), Some(json!({"first_name": "Petr"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Petr");
    assert_eq!(updated["login"], "test");

    let (status, page) = send(&app, "GET", "/users?page=0&size=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_items"], 1);

    let (status, _) = send(&app, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, err) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");
    assert_eq!(err["code"], 1003);
}

#[tokio::test]
async fn invalid_user_is_unprocessable() {
    let (status, err) = send(&app(), "POST", "/users", Some(user_body("", "broken"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err["detail"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn wrong_old_password_is_unauthorized() {
    let app = app();
    let (_, created) = send(&app, "POST", "/users", Some(user_body("test", "test@test.ru"))).await;
    let uri = format!("/users/{}/password", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "PUT", &uri, Some(json!({"old_password": "nope", "new_password": "x"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({"old_password": "Passw0rd", "new_password": "x"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn document_flow_with_stale_update() {
    let app = app();
    let now = FixedClock::fixture().utc();
    let (_, user) = send(&app, "POST", "/users", Some(user_body("owner", "owner@test.ru"))).await;
    let (_, attr) = send(&app, "POST", "/attributes", Some(json!({"name": "number", "data_type": "text"}))).await;
    let (status, dt) = send(
        &app,
        "POST",
        "/document-types",
        Some(json!({"name": "contract", "description": "", "attribute_ids": [attr["id"]]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dt["attributes"], json!([{"name": "number"}]));

    let stale = (now - Duration::days(3)).to_rfc3339();
    let (status, doc) = send(
        &app,
        "POST",
        "/documents",
        Some(json!({
            "name": "contract-1",
            "user_id": user["id"],
            "document_type_id": dt["id"],
            "creation_date": stale,
            "update_date": stale
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let doc_uri = format!("/documents/{}", doc["id"]);

    let (status, err) = send(&app, "PUT", &doc_uri, Some(json!({"name": "renamed"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Wrong Date");

    let (status, value) = send(
        &app,
        "POST",
        "/attribute-values",
        Some(json!({"attribute_id": attr["id"], "document_id": doc["id"], "value": "42"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(value["value"], "42");

    let (status, values) = send(&app, "GET", &format!("{doc_uri}/attribute-values"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &doc_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/attribute-values/{}", value["id"]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attribute_value_requires_both_ids() {
    let (status, err) = send(&app(), "POST", "/attribute-values", Some(json!({"value": "x"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["detail"], "attribute_id: must not be null; document_id: must not be null");
}

#[tokio::test]
async fn malformed_json_gets_error_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"login\": "))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["code"], server::extract::REQUEST_REJECTED_CODE);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn bad_path_and_query_get_error_body() {
    let app = app();
    let (status, body) = send(&app, "GET", "/users/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], server::extract::REQUEST_REJECTED_CODE);

    let (status, body) = send(&app, "GET", "/documents?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], server::extract::REQUEST_REJECTED_CODE);
}

#[tokio::test]
async fn huge_page_index_is_rejected() {
    let (status, body) = send(&app(), "GET", "/users?page=1844674407370955161&size=10", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
}
