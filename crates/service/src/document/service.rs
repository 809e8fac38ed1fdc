use std::sync::Arc;

use chrono::Duration;
use mockable::Clock;
use tracing::{info, instrument, warn};

use common::pagination::{Page, Pagination};
use models::document::{Model, NewDocument};

use super::domain::{DocumentDraft, DocumentPatch};
use super::repository::DocumentRepository;
use crate::document_type::repository::DocumentTypeRepository;
use crate::errors::ServiceError;
use crate::store::{Transaction, UnitOfWork};
use crate::user::repository::UserRepository;

pub const DEFAULT_MAX_STALENESS_HOURS: i64 = 24;

/// Documents and their date-consistency rules.
///
/// An update is refused with [`ServiceError::WrongDate`] when the stored
/// `update_date` is older than the staleness window, measured against the
/// injected clock, and when the merged result would have `update_date`
/// before `creation_date`.
pub struct DocumentService<S: UnitOfWork> {
    store: Arc<S>,
    clock: Arc<dyn Clock + Send + Sync>,
    max_staleness: Duration,
}

impl<S: UnitOfWork> Clone for DocumentService<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), clock: self.clock.clone(), max_staleness: self.max_staleness }
    }
}

impl<S: UnitOfWork> DocumentService<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { store, clock, max_staleness: Duration::hours(DEFAULT_MAX_STALENESS_HOURS) }
    }

    pub fn with_max_staleness(mut self, max_staleness: Duration) -> Self {
        self.max_staleness = max_staleness;
        self
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<Page<Model>, ServiceError> {
        self.store.list_documents(page).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Model, ServiceError> {
        self.store.find_document(id).await?.ok_or_else(|| ServiceError::not_found("document", id))
    }

    #[instrument(skip(self, draft), fields(user_id = %draft.user_id, document_type_id = draft.document_type_id))]
    pub async fn create(&self, draft: DocumentDraft) -> Result<Model, ServiceError> {
        draft.validate()?;
        let tx = self.store.begin().await?;
        if tx.find_user(draft.user_id).await?.is_none() {
            return Err(ServiceError::not_found("user", draft.user_id));
        }
        if tx.find_document_type(draft.document_type_id).await?.is_none() {
            return Err(ServiceError::not_found("document type", draft.document_type_id));
        }

        let doc = tx
            .insert_document(NewDocument {
                name: draft.name,
                creation_date: draft.creation_date,
                update_date: draft.update_date,
                user_id: draft.user_id,
                document_type_id: draft.document_type_id,
            })
            .await?;
        tx.commit().await?;
        info!(document_id = doc.id, user_id = %doc.user_id, "document_created");
        Ok(doc)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: DocumentPatch) -> Result<Model, ServiceError> {
        patch.validate()?;
        let tx = self.store.begin().await?;
        let mut doc = tx.find_document(id).await?.ok_or_else(|| ServiceError::not_found("document", id))?;

        let age = self.clock.utc().signed_duration_since(doc.update_date);
        if age > self.max_staleness {
            warn!(document_id = id, update_date = %doc.update_date, "stale document update refused");
            return Err(ServiceError::WrongDate(format!(
                "document {id} was last updated at {}, outside the {}h update window",
                doc.update_date,
                self.max_staleness.num_hours()
            )));
        }

        if let Some(user_id) = patch.user_id {
            if tx.find_user(user_id).await?.is_none() {
                return Err(ServiceError::not_found("user", user_id));
            }
        }
        if let Some(document_type_id) = patch.document_type_id {
            if tx.find_document_type(document_type_id).await?.is_none() {
                return Err(ServiceError::not_found("document type", document_type_id));
            }
        }

        patch.apply(&mut doc);
        if doc.update_date < doc.creation_date {
            return Err(ServiceError::WrongDate(format!(
                "update_date {} is before creation_date {}",
                doc.update_date, doc.creation_date
            )));
        }

        let doc = tx.update_document(doc).await?;
        tx.commit().await?;
        info!(document_id = doc.id, "document_updated");
        Ok(doc)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let tx = self.store.begin().await?;
        if !tx.delete_document(id).await? {
            return Err(ServiceError::not_found("document", id));
        }
        tx.commit().await?;
        info!(document_id = id, "document_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::test_support::FixedClock;
    use models::{document_type, user};
    use sea_orm::prelude::DateTimeWithTimeZone;
    use uuid::Uuid;

    struct Fixture {
        store: Arc<MemoryStore>,
        svc: DocumentService<MemoryStore>,
        now: DateTimeWithTimeZone,
        user_id: Uuid,
        document_type_id: i64,
    }

    async fn fixture() -> Fixture {
        let clock = FixedClock::fixture();
        let now: DateTimeWithTimeZone = clock.utc().into();
        let store = Arc::new(MemoryStore::new());
        let user = store
            .insert_user(user::NewUser {
                login: "test".into(),
                email: "test@test.ru".into(),
                first_name: "Ivan".into(),
                last_name: "Ivanov".into(),
                patronymic: "Ivanovich".into(),
                password: "hash".into(),
            })
            .await
            .unwrap();
        let dt = store
            .insert_document_type(
                document_type::NewDocumentType { name: "contract".into(), description: String::new(), created_at: now },
                &[],
            )
            .await
            .unwrap();
        let svc = DocumentService::new(store.clone(), clock.shared());
        Fixture { store, svc, now, user_id: user.id, document_type_id: dt.id }
    }

    impl Fixture {
        async fn seed_document(&self, updated_ago: Duration) -> Model {
            self.store
                .insert_document(NewDocument {
                    name: "contract-1".into(),
                    creation_date: self.now - Duration::days(30),
                    update_date: self.now - updated_ago,
                    user_id: self.user_id,
                    document_type_id: self.document_type_id,
                })
                .await
                .unwrap()
        }

        fn draft(&self) -> DocumentDraft {
            DocumentDraft {
                name: "contract-2".into(),
                user_id: self.user_id,
                document_type_id: self.document_type_id,
                creation_date: self.now,
                update_date: self.now,
            }
        }
    }

    #[tokio::test]
    async fn create_checks_references() {
        let f = fixture().await;
        let doc = f.svc.create(f.draft()).await.unwrap();
        assert_eq!(f.svc.get(doc.id).await.unwrap(), doc);

        let mut missing_user = f.draft();
        missing_user.user_id = Uuid::new_v4();
        assert!(matches!(f.svc.create(missing_user).await, Err(ServiceError::NotFound(_))));

        let mut missing_type = f.draft();
        missing_type.document_type_id = 999;
        assert!(matches!(f.svc.create(missing_type).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let f = fixture().await;
        let mut draft = f.draft();
        draft.name = "  ".into();
        assert!(matches!(f.svc.create(draft).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn fresh_document_accepts_partial_update() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::hours(1)).await;

        let patch = DocumentPatch { name: Some("renamed".into()), update_date: Some(f.now), ..Default::default() };
        let updated = f.svc.update(doc.id, patch).await.unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.update_date, f.now);
        assert_eq!(updated.creation_date, doc.creation_date);
        assert_eq!(updated.user_id, doc.user_id);
    }

    #[tokio::test]
    async fn stale_document_is_refused_without_writing() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::days(2)).await;
        let writes = f.store.write_count();

        let patch = DocumentPatch { name: Some("renamed".into()), ..Default::default() };
        let err = f.svc.update(doc.id, patch).await.unwrap_err();

        assert!(matches!(err, ServiceError::WrongDate(_)));
        assert_eq!(f.store.write_count(), writes);
        assert_eq!(f.svc.get(doc.id).await.unwrap().name, "contract-1");
    }

    #[tokio::test]
    async fn staleness_window_boundary_is_inclusive() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::hours(DEFAULT_MAX_STALENESS_HOURS)).await;
        assert!(f.svc.update(doc.id, DocumentPatch::default()).await.is_ok());
    }

    #[tokio::test]
    async fn staleness_window_is_configurable() {
        let f = fixture().await;
        let svc = f.svc.clone().with_max_staleness(Duration::hours(1));
        let doc = f.seed_document(Duration::hours(2)).await;
        assert!(matches!(svc.update(doc.id, DocumentPatch::default()).await, Err(ServiceError::WrongDate(_))));
        assert!(f.svc.update(doc.id, DocumentPatch::default()).await.is_ok());
    }

    #[tokio::test]
    async fn merged_dates_must_stay_ordered() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::hours(1)).await;

        let patch = DocumentPatch { creation_date: Some(f.now + Duration::days(1)), ..Default::default() };
        assert!(matches!(f.svc.update(doc.id, patch).await, Err(ServiceError::WrongDate(_))));
    }

    #[tokio::test]
    async fn update_resolves_new_references() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::hours(1)).await;

        let patch = DocumentPatch { user_id: Some(Uuid::new_v4()), ..Default::default() };
        assert!(matches!(f.svc.update(doc.id, patch).await, Err(ServiceError::NotFound(_))));

        let patch = DocumentPatch { document_type_id: Some(404), ..Default::default() };
        assert!(matches!(f.svc.update(doc.id, patch).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_missing_document_is_not_found() {
        let f = fixture().await;
        assert!(matches!(f.svc.update(12345, DocumentPatch::default()).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_reports_missing() {
        let f = fixture().await;
        let doc = f.seed_document(Duration::hours(1)).await;
        f.svc.delete(doc.id).await.unwrap();
        assert!(matches!(f.svc.delete(doc.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_raw_documents() {
        let f = fixture().await;
        f.seed_document(Duration::hours(1)).await;
        f.seed_document(Duration::hours(2)).await;
        let page = f.svc.list(Pagination::default()).await.unwrap();
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items[0].name, "contract-1");
    }
}
