use crate::domain::entities::Entity;
use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Sort key for `list`. `"field"` sorts ascending, `"-field"` descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl OrderBy {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }
}

impl FromStr for OrderBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        validate_field_name(field)?;
        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

/// Equality predicate on one top-level record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub field: String,
    pub value: serde_json::Value,
}

impl FieldMatch {
    pub fn new(field: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Field names end up inside JSON paths, so only plain identifiers pass.
pub fn validate_field_name(field: &str) -> Result<(), DomainError> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DomainError::Validation(format!("Invalid field name: '{field}'")));
    }
    Ok(())
}

/// Generic record storage for one entity type.
pub trait RecordStore<T: Entity>: Send + Sync {
    fn list(&self, order_by: Option<&OrderBy>, limit: Option<usize>) -> Result<Vec<T>, DomainError>;
    fn create(&self, record: &T) -> Result<T, DomainError>;
    fn delete(&self, id: &str) -> Result<(), DomainError>;
    /// Records matching every predicate, newest first.
    fn filter(&self, matches: &[FieldMatch]) -> Result<Vec<T>, DomainError>;
}
