use std::collections::HashSet;

use serde::Deserialize;

use models::document_type;

use crate::errors::{ServiceError, ValidationErrors};

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTypeDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attribute_ids: Vec<i64>,
}

impl DocumentTypeDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check("name", document_type::validate_name(&self.name));
        check_unique_ids(&mut errors, &self.attribute_ids);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub attribute_ids: Option<Vec<i64>>,
}

impl DocumentTypePatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check_present("name", self.name.as_deref(), document_type::validate_name);
        if let Some(ids) = &self.attribute_ids {
            check_unique_ids(&mut errors, ids);
        }
        errors.into_result()
    }
}

fn check_unique_ids(errors: &mut ValidationErrors, ids: &[i64]) {
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        errors.add("attribute_ids", format!("attribute {dup} listed twice"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_attribute_ids_are_rejected() {
        let draft = DocumentTypeDraft { name: "invoice".into(), description: String::new(), attribute_ids: vec![1, 2, 1] };
        assert!(matches!(draft.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn description_and_attributes_default_to_empty() {
        let draft: DocumentTypeDraft = serde_json::from_str(r#"{"name":"memo"}"#).unwrap();
        assert!(draft.description.is_empty());
        assert!(draft.attribute_ids.is_empty());
        assert!(draft.validate().is_ok());
    }
}
