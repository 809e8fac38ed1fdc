use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;
use uuid::Uuid;

use models::document;

use crate::errors::{ServiceError, ValidationErrors};

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDraft {
    pub name: String,
    pub user_id: Uuid,
    pub document_type_id: i64,
    pub creation_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
}

impl DocumentDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check("name", document::validate_name(&self.name));
        errors.check("update_date", document::validate_dates(&self.creation_date, &self.update_date));
        errors.into_result()
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub creation_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub user_id: Option<Uuid>,
    pub document_type_id: Option<i64>,
}

impl DocumentPatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check_present("name", self.name.as_deref(), document::validate_name);
        errors.into_result()
    }

    /// Overwrite the present fields of `doc`.
    pub fn apply(self, doc: &mut document::Model) {
        if let Some(name) = self.name {
            doc.name = name;
        }
        if let Some(creation_date) = self.creation_date {
            doc.creation_date = creation_date;
        }
        if let Some(update_date) = self.update_date {
            doc.update_date = update_date;
        }
        if let Some(user_id) = self.user_id {
            doc.user_id = user_id;
        }
        if let Some(document_type_id) = self.document_type_id {
            doc.document_type_id = document_type_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample() -> document::Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        document::Model {
            id: 1,
            name: "contract".into(),
            creation_date: now,
            update_date: now,
            user_id: Uuid::new_v4(),
            document_type_id: 7,
        }
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut doc = sample();
        let before = doc.clone();
        DocumentPatch { name: Some("renamed".into()), ..Default::default() }.apply(&mut doc);
        assert_eq!(doc.name, "renamed");
        assert_eq!(doc.user_id, before.user_id);
        assert_eq!(doc.update_date, before.update_date);
        assert_eq!(doc.document_type_id, 7);
    }

    #[test]
    fn draft_rejects_reversed_dates() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let draft = DocumentDraft {
            name: "x".into(),
            user_id: Uuid::new_v4(),
            document_type_id: 1,
            creation_date: now,
            update_date: now - Duration::hours(1),
        };
        assert!(matches!(draft.validate(), Err(ServiceError::Validation(_))));
    }
}
