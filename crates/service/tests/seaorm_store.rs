//! Services over the sea-orm store against a real Postgres.
//!
//! Skipped when `SKIP_DB_TESTS` is set or no `DATABASE_URL` is configured.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};
use migration::MigratorTrait;
use uuid::Uuid;

use common::pagination::Pagination;

use service::attribute::domain::AttributeDraft;
use service::attribute_value::domain::AttributeValueDraft;
use service::credentials::Argon2PasswordEncoder;
use service::document::domain::{DocumentDraft, DocumentPatch};
use service::document_type::domain::DocumentTypeDraft;
use service::store::{SeaOrmStore, UnitOfWork};
use service::user::domain::{PasswordChange, UserDraft};
use service::user::repository::UserRepository;
use service::{ServiceError, Services};

async fn setup() -> Result<Option<(Arc<SeaOrmStore>, Services<SeaOrmStore>)>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: no database configured for store tests");
        return Ok(None);
    }
    let cfg = configs::DatabaseConfig::from_env();
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    let store = Arc::new(SeaOrmStore::new(db));
    let services = Services::new(
        store.clone(),
        Arc::new(Argon2PasswordEncoder::default()),
        Arc::new(mockable::DefaultClock),
    );
    Ok(Some((store, services)))
}

fn unique(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

fn draft(login: &str) -> UserDraft {
    UserDraft {
        login: login.to_string(),
        email: format!("{login}@test.ru"),
        first_name: "Ivan".into(),
        last_name: "Ivanov".into(),
        patronymic: "Ivanovich".into(),
        password: "Passw0rd".into(),
    }
}

#[tokio::test]
async fn user_lifecycle() -> Result<()> {
    let Some((_, services)) = setup().await? else { return Ok(()) };
    let login = unique("user");

    let user = services.users.create(draft(&login)).await?;
    assert_eq!(services.users.get(user.id).await?, user);

    let err = services.users.create(draft(&login)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let change = PasswordChange { old_password: "Passw0rd".into(), new_password: "N3w-secret".into() };
    services.users.update_password(user.id, change).await?;

    services.users.delete(user.id).await?;
    assert!(matches!(services.users.delete(user.id).await, Err(ServiceError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn unique_index_surfaces_as_conflict() -> Result<()> {
    let Some((store, services)) = setup().await? else { return Ok(()) };
    let login = unique("dup");
    let user = services.users.create(draft(&login)).await?;

    // bypass the service checks and hit the index directly
    let tx = store.begin().await?;
    let err = tx
        .insert_user(models::user::NewUser {
            login: unique("other"),
            email: user.email.clone(),
            first_name: "a".into(),
            last_name: "b".into(),
            patronymic: "c".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    drop(tx);

    services.users.delete(user.id).await?;
    Ok(())
}

#[tokio::test]
async fn huge_page_index_never_reaches_the_paginator() -> Result<()> {
    let Some((store, _)) = setup().await? else { return Ok(()) };
    let err = store.list_users(Pagination::new(u64::MAX / 2, 10)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    let err = store.list_users(Pagination::new(1_844_674_407_370_955_161, 10)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn oversized_names_are_validation_errors() -> Result<()> {
    let Some((_, services)) = setup().await? else { return Ok(()) };
    let long = "n".repeat(300);
    let err = services
        .attributes
        .create(AttributeDraft { name: long.clone(), data_type: "text".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    let err = services
        .document_types
        .create(DocumentTypeDraft { name: long, description: String::new(), attribute_ids: vec![] })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn document_flow_with_schema_and_values() -> Result<()> {
    let Some((_, services)) = setup().await? else { return Ok(()) };

    let user = services.users.create(draft(&unique("owner"))).await?;
    let a1 = services.attributes.create(AttributeDraft { name: unique("a1"), data_type: "text".into() }).await?;
    let a2 = services.attributes.create(AttributeDraft { name: unique("a2"), data_type: "date".into() }).await?;
    let dt = services
        .document_types
        .create(DocumentTypeDraft { name: unique("type"), description: "d".into(), attribute_ids: vec![a2.id, a1.id] })
        .await?;
    assert_eq!(dt.attributes.iter().map(|a| a.name.clone()).collect::<Vec<_>>(), vec![a2.name.clone(), a1.name.clone()]);

    let now = Utc::now().into();
    let doc = services
        .documents
        .create(DocumentDraft { name: "contract".into(), user_id: user.id, document_type_id: dt.id, creation_date: now, update_date: now })
        .await?;
    services
        .attribute_values
        .create(AttributeValueDraft { attribute_id: Some(a1.id), document_id: Some(doc.id), value: Some("42".into()) })
        .await?;
    assert_eq!(services.attribute_values.list_by_document(doc.id).await?.len(), 1);

    let patch = DocumentPatch { name: Some("renamed".into()), update_date: Some(now + Duration::minutes(1)), ..Default::default() };
    assert_eq!(services.documents.update(doc.id, patch).await?.name, "renamed");

    services.documents.delete(doc.id).await?;
    assert!(matches!(services.attribute_values.list_by_document(doc.id).await, Err(ServiceError::NotFound(_))));
    services.document_types.delete(dt.id).await?;
    services.attributes.delete(a1.id).await?;
    services.attributes.delete(a2.id).await?;
    services.users.delete(user.id).await?;
    Ok(())
}
