use crate::domain::error::DomainError;
use crate::domain::ports::identity::{IdentityProvider, User};

/// Identity taken from configuration rather than a login session.
pub struct EnvIdentity {
    email: Option<String>,
    full_name: Option<String>,
}

impl EnvIdentity {
    pub fn new(email: Option<String>, full_name: Option<String>) -> Self {
        Self { email, full_name }
    }

    pub fn with_email(email: &str) -> Self {
        Self::new(Some(email.to_string()), None)
    }
}

impl IdentityProvider for EnvIdentity {
    fn current_user(&self) -> Result<User, DomainError> {
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => Ok(User {
                email: email.to_string(),
                full_name: self.full_name.clone(),
            }),
            _ => Err(DomainError::Identity(
                "No current user; set MANDIWATCH_USER_EMAIL".into(),
            )),
        }
    }
}
