use serde::Deserialize;

use models::attribute;

use crate::errors::{ServiceError, ValidationErrors};

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDraft {
    pub name: String,
    pub data_type: String,
}

impl AttributeDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check("name", attribute::validate_name(&self.name));
        errors.check("data_type", attribute::validate_data_type(&self.data_type));
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributePatch {
    pub name: Option<String>,
    pub data_type: Option<String>,
}

impl AttributePatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = ValidationErrors::new();
        errors.check_present("name", self.name.as_deref(), attribute::validate_name);
        errors.check_present("data_type", self.data_type.as_deref(), attribute::validate_data_type);
        errors.into_result()
    }
}
