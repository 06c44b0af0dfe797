use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single rule violation reported back to the form that submitted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Every failing field of one submission, in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| format!("{}: {}", e.field, e.message)).collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Username {0} already taken")]
    UsernameTaken(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<FieldErrors> for SiteError {
    fn from(errors: FieldErrors) -> Self {
        SiteError::Validation(errors)
    }
}
