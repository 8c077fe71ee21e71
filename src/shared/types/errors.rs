use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single rule violation reported against a payload field.
///
/// `field` is the camelCase path of the offending value as it appears in
/// the request body, e.g. `address.zipCode` or `openingHours[1].openTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field error collected while checking one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} with {field} {value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn poi_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "POI",
            field: "ID",
            value: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        Self::Persistence(err.to_string())
    }
}
