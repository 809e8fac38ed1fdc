//! SeaORM-backed store. The same type serves plain connections and open
//! transactions, so `SeaOrmStore<DatabaseTransaction>` is the unit of work.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use common::pagination::{Page, Pagination};
use models::{attribute, attribute_value, document, document_type, document_type_attribute, user};

use super::{check_page, Transaction, UnitOfWork};
use crate::attribute::repository::AttributeRepository;
use crate::attribute_value::repository::AttributeValueRepository;
use crate::document::repository::DocumentRepository;
use crate::document_type::repository::DocumentTypeRepository;
use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

#[derive(Clone)]
pub struct SeaOrmStore<C = DatabaseConnection> {
    conn: C,
}

impl<C> SeaOrmStore<C> {
    pub fn new(conn: C) -> Self { Self { conn } }
}

#[async_trait]
impl UnitOfWork for SeaOrmStore<DatabaseConnection> {
    type Tx = SeaOrmStore<DatabaseTransaction>;

    async fn begin(&self) -> Result<Self::Tx, ServiceError> {
        Ok(SeaOrmStore { conn: self.conn.begin().await? })
    }
}

#[async_trait]
impl Transaction for SeaOrmStore<DatabaseTransaction> {
    async fn commit(self) -> Result<(), ServiceError> {
        self.conn.commit().await?;
        Ok(())
    }
}

async fn paged<E, C>(conn: &C, select: sea_orm::Select<E>, opts: Pagination) -> Result<Page<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    C: ConnectionTrait,
{
    check_page(opts)?;
    let (page, size) = opts.normalize();
    let paginator = select.paginate(conn, size);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page).await?;
    Ok(Page::new(items, opts, total))
}

#[async_trait]
impl<C> UserRepository for SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_user(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let n = user::Entity::find().filter(user::Column::Email.eq(email)).count(&self.conn).await?;
        Ok(n > 0)
    }

    async fn user_exists_by_login(&self, login: &str) -> Result<bool, ServiceError> {
        let n = user::Entity::find().filter(user::Column::Login.eq(login)).count(&self.conn).await?;
        Ok(n > 0)
    }

    async fn insert_user(&self, new: user::NewUser) -> Result<user::Model, ServiceError> {
        Ok(new.into_active_model().insert(&self.conn).await?)
    }

    async fn update_user(&self, model: user::Model) -> Result<user::Model, ServiceError> {
        Ok(user::ActiveModel::from(model).reset_all().update(&self.conn).await?)
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = user::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_users(&self, page: Pagination) -> Result<Page<user::Model>, ServiceError> {
        paged(&self.conn, user::Entity::find().order_by_asc(user::Column::Login), page).await
    }
}

#[async_trait]
impl<C> DocumentRepository for SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_document(&self, id: i64) -> Result<Option<document::Model>, ServiceError> {
        Ok(document::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn insert_document(&self, new: document::NewDocument) -> Result<document::Model, ServiceError> {
        Ok(new.into_active_model().insert(&self.conn).await?)
    }

    async fn update_document(&self, model: document::Model) -> Result<document::Model, ServiceError> {
        Ok(document::ActiveModel::from(model).reset_all().update(&self.conn).await?)
    }

    async fn delete_document(&self, id: i64) -> Result<bool, ServiceError> {
        // attribute values go with it through the cascading foreign key
        let res = document::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_documents(&self, page: Pagination) -> Result<Page<document::Model>, ServiceError> {
        paged(&self.conn, document::Entity::find().order_by_asc(document::Column::Id), page).await
    }
}

impl<C> SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn link_attributes(&self, document_type_id: i64, attribute_ids: &[i64]) -> Result<(), ServiceError> {
        if attribute_ids.is_empty() {
            return Ok(());
        }
        let rows = attribute_ids.iter().enumerate().map(|(pos, attribute_id)| document_type_attribute::ActiveModel {
            document_type_id: Set(document_type_id),
            attribute_id: Set(*attribute_id),
            position: Set(pos as i32),
        });
        document_type_attribute::Entity::insert_many(rows).exec_without_returning(&self.conn).await?;
        Ok(())
    }

    async fn unlink_attributes(&self, document_type_id: i64) -> Result<(), ServiceError> {
        document_type_attribute::Entity::delete_many()
            .filter(document_type_attribute::Column::DocumentTypeId.eq(document_type_id))
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<C> DocumentTypeRepository for SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_document_type(&self, id: i64) -> Result<Option<document_type::Model>, ServiceError> {
        Ok(document_type::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn document_type_attributes(&self, id: i64) -> Result<Vec<attribute::Model>, ServiceError> {
        let ids: Vec<i64> = document_type_attribute::Entity::find()
            .filter(document_type_attribute::Column::DocumentTypeId.eq(id))
            .order_by_asc(document_type_attribute::Column::Position)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|link| link.attribute_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut by_id: HashMap<i64, attribute::Model> = attribute::Entity::find()
            .filter(attribute::Column::Id.is_in(ids.clone()))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn insert_document_type(
        &self,
        new: document_type::NewDocumentType,
        attribute_ids: &[i64],
    ) -> Result<document_type::Model, ServiceError> {
        let model = new.into_active_model().insert(&self.conn).await?;
        self.link_attributes(model.id, attribute_ids).await?;
        Ok(model)
    }

    async fn update_document_type(
        &self,
        model: document_type::Model,
        attribute_ids: Option<&[i64]>,
    ) -> Result<document_type::Model, ServiceError> {
        let updated = document_type::ActiveModel::from(model).reset_all().update(&self.conn).await?;
        if let Some(ids) = attribute_ids {
            self.unlink_attributes(updated.id).await?;
            self.link_attributes(updated.id, ids).await?;
        }
        Ok(updated)
    }

    async fn delete_document_type(&self, id: i64) -> Result<bool, ServiceError> {
        self.unlink_attributes(id).await?;
        let res = document_type::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_document_types(&self, page: Pagination) -> Result<Page<document_type::Model>, ServiceError> {
        paged(&self.conn, document_type::Entity::find().order_by_asc(document_type::Column::Id), page).await
    }
}

#[async_trait]
impl<C> AttributeRepository for SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_attribute(&self, id: i64) -> Result<Option<attribute::Model>, ServiceError> {
        Ok(attribute::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn insert_attribute(&self, new: attribute::NewAttribute) -> Result<attribute::Model, ServiceError> {
        Ok(new.into_active_model().insert(&self.conn).await?)
    }

    async fn update_attribute(&self, model: attribute::Model) -> Result<attribute::Model, ServiceError> {
        Ok(attribute::ActiveModel::from(model).reset_all().update(&self.conn).await?)
    }

    async fn delete_attribute(&self, id: i64) -> Result<bool, ServiceError> {
        document_type_attribute::Entity::delete_many()
            .filter(document_type_attribute::Column::AttributeId.eq(id))
            .exec(&self.conn)
            .await?;
        let res = attribute::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_attributes(&self, page: Pagination) -> Result<Page<attribute::Model>, ServiceError> {
        paged(&self.conn, attribute::Entity::find().order_by_asc(attribute::Column::Id), page).await
    }
}

#[async_trait]
impl<C> AttributeValueRepository for SeaOrmStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_attribute_value(&self, id: i64) -> Result<Option<attribute_value::Model>, ServiceError> {
        Ok(attribute_value::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn insert_attribute_value(
        &self,
        new: attribute_value::NewAttributeValue,
    ) -> Result<attribute_value::Model, ServiceError> {
        Ok(new.into_active_model().insert(&self.conn).await?)
    }

    async fn update_attribute_value(
        &self,
        model: attribute_value::Model,
    ) -> Result<attribute_value::Model, ServiceError> {
        Ok(attribute_value::ActiveModel::from(model).reset_all().update(&self.conn).await?)
    }

    async fn delete_attribute_value(&self, id: i64) -> Result<bool, ServiceError> {
        let res = attribute_value::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_attribute_values_by_document(
        &self,
        document_id: i64,
    ) -> Result<Vec<attribute_value::Model>, ServiceError> {
        Ok(attribute_value::Entity::find()
            .filter(attribute_value::Column::DocumentId.eq(document_id))
            .order_by_asc(attribute_value::Column::Id)
            .all(&self.conn)
            .await?)
    }
}
