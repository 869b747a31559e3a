use crate::domain::error::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub email: String,
    pub full_name: Option<String>,
}

/// Resolves who is making the request.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Result<User, DomainError>;
}
