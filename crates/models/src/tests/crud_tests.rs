use crate::{attribute, attribute_value, document, document_type, document_type_attribute, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use anyhow::Result;
use chrono::{Duration, Utc};
use uuid::Uuid;

use super::setup_test_db;

fn new_user() -> user::NewUser {
    let tag = Uuid::new_v4().simple().to_string();
    user::NewUser {
        login: format!("login_{tag}"),
        email: format!("{tag}@example.com"),
        first_name: "Ivan".into(),
        last_name: "Petrov".into(),
        patronymic: "Sergeevich".into(),
        password: "hash".into(),
    }
}

/// Test user CRUD and the unique login constraint
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let draft = new_user();
    let created = draft.clone().into_active_model().insert(&db).await?;
    assert_eq!(created.login, draft.login);

    let found = user::Entity::find()
        .filter(user::Column::Email.eq(draft.email.clone()))
        .one(&db)
        .await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    // duplicate login must be refused by the schema
    let mut dup = new_user();
    dup.login = draft.login.clone();
    assert!(dup.into_active_model().insert(&db).await.is_err());

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Test the full document graph: type with ordered attributes, document, values
#[tokio::test]
async fn test_document_graph() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let owner = new_user().into_active_model().insert(&db).await?;
    let dtype = document_type::NewDocumentType {
        name: "contract".into(),
        description: "signed agreements".into(),
        created_at: Utc::now().into(),
    }
    .into_active_model()
    .insert(&db)
    .await?;
    let signer = attribute::NewAttribute { name: "signer".into(), data_type: "text".into() }
        .into_active_model()
        .insert(&db)
        .await?;
    let due = attribute::NewAttribute { name: "due".into(), data_type: "date".into() }
        .into_active_model()
        .insert(&db)
        .await?;
    for (position, attr) in [&due, &signer].iter().enumerate() {
        document_type_attribute::ActiveModel {
            document_type_id: Set(dtype.id),
            attribute_id: Set(attr.id),
            position: Set(position as i32),
        }
        .insert(&db)
        .await?;
    }

    let ordered = dtype
        .find_related(attribute::Entity)
        .order_by_asc(document_type_attribute::Column::Position)
        .all(&db)
        .await?;
    assert_eq!(ordered.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["due", "signer"]);

    let now = Utc::now();
    let doc = document::NewDocument {
        name: "Lease".into(),
        creation_date: (now - Duration::days(1)).into(),
        update_date: now.into(),
        user_id: owner.id,
        document_type_id: dtype.id,
    }
    .into_active_model()
    .insert(&db)
    .await?;
    assert!(doc.id > 0);

    let value = attribute_value::NewAttributeValue { attribute_id: signer.id, document_id: doc.id, value: None }
        .into_active_model()
        .insert(&db)
        .await?;
    assert_eq!(value.value, None);

    // values follow their document
    document::Entity::delete_by_id(doc.id).exec(&db).await?;
    assert!(attribute_value::Entity::find_by_id(value.id).one(&db).await?.is_none());

    document_type::Entity::delete_by_id(dtype.id).exec(&db).await?;
    attribute::Entity::delete_many()
        .filter(attribute::Column::Id.is_in([signer.id, due.id]))
        .exec(&db)
        .await?;
    user::Entity::delete_by_id(owner.id).exec(&db).await?;
    Ok(())
}
