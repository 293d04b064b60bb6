use uuid::Uuid;

use crate::email::{AuthError, validate_email};
use crate::session::AuthState;

/// A sign-in link that has been "sent" and is waiting to be clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicLink {
    email: String,
}

impl MagicLink {
    /// First step: validate the address and issue a pending link.
    pub fn request(email: &str) -> Result<Self, AuthError> {
        let email = validate_email(email)?;
        tracing::info!(%email, "magic link requested");
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Second step: the link was followed. Produces an authenticated session
    /// with a freshly generated token.
    pub fn verify(self) -> AuthState {
        let state = AuthState::authenticated(self.email, generate_token());
        tracing::info!(email = ?state.email, "magic link verified");
        state
    }
}

/// Opaque, locally generated session token.
pub fn generate_token() -> String {
    Uuid::now_v7().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_then_verify_signs_in() {
        let link = MagicLink::request("owner@kopi.id").unwrap();
        assert_eq!(link.email(), "owner@kopi.id");

        let state = link.verify();
        assert!(state.is_authenticated());
        assert_eq!(state.email.as_deref(), Some("owner@kopi.id"));
        assert!(state.token.as_deref().is_some_and(|t| !t.is_empty()));
    }

    #[test]
    fn request_rejects_invalid_email() {
        assert_eq!(MagicLink::request("nope"), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn tokens_differ_between_sign_ins() {
        assert_ne!(generate_token(), generate_token());
    }
}
