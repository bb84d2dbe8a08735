//! Authentication types for the domain layer.
//!
//! These types represent an authenticated platform user extracted from a
//! bearer token. Any token issuer can populate them via the `SessionValidator`
//! port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(UserId::new("42")?, "jdoe", Some("Jane Doe".to_string()));
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the token issuer.
    pub id: UserId,

    /// Platform login name. Recorded on rows this user modifies.
    pub username: String,

    /// Display name if available.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, username: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name,
        }
    }

    /// Returns the user's display name, or username as fallback.
    pub fn display_name_or_username(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
