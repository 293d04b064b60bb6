//! `brewerp-auth`: simulated magic-link sign-in.
//!
//! There is no backend: a valid email address is enough to "receive" a link,
//! and verifying it mints a random opaque token locally. This gates the UI; it
//! is not a security boundary.

pub mod email;
pub mod magic_link;
pub mod session;

pub use email::{AuthError, validate_email};
pub use magic_link::{MagicLink, generate_token};
pub use session::AuthState;
