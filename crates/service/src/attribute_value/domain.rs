use serde::Deserialize;

use crate::errors::{ServiceError, ValidationErrors};

/// Both references are optional on the wire but required to create a value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeValueDraft {
    pub attribute_id: Option<i64>,
    pub document_id: Option<i64>,
    pub value: Option<String>,
}

impl AttributeValueDraft {
    /// Returns `(attribute_id, document_id)` once both are present.
    pub fn validate(&self) -> Result<(i64, i64), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.require("attribute_id", self.attribute_id.as_ref());
        errors.require("document_id", self.document_id.as_ref());
        match (self.attribute_id, self.document_id) {
            (Some(attribute_id), Some(document_id)) => Ok((attribute_id, document_id)),
            _ => Err(ServiceError::Validation(errors)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeValueUpdate {
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ids_are_required() {
        let draft = AttributeValueDraft { attribute_id: Some(1), ..Default::default() };
        match draft.validate() {
            Err(ServiceError::Validation(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["document_id"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
        let ok = AttributeValueDraft { attribute_id: Some(1), document_id: Some(2), value: None };
        assert_eq!(ok.validate().unwrap(), (1, 2));
    }
}
