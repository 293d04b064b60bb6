use serde::{Deserialize, Serialize};

use brewerp_core::{DomainError, DomainResult};

/// Who is signed in, persisted alongside the inventory and recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub email: Option<String>,
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn authenticated(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token.into()),
            email: Some(email.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Guard for screens that need a signed-in user.
    pub fn require_authenticated(&self) -> DomainResult<&str> {
        match (&self.is_authenticated, &self.email) {
            (true, Some(email)) => Ok(email),
            _ => Err(DomainError::unauthorized("sign in first")),
        }
    }
}
