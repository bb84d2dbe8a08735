//! Shared-secret JWT adapter for the `SessionValidator` port.
//!
//! Validates HS256 tokens issued by the platform's login service:
//!
//! - **Signature**: HMAC-SHA256 with the configured secret
//! - **Issuer (iss)**: must match `AuthConfig::issuer`
//! - **Audience (aud)**: must match `AuthConfig::audience`
//! - **Expiry (exp)**: must be in the future, allowing `leeway_secs` skew

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by platform access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformClaims {
    /// Subject - the user ID
    pub sub: String,

    pub iss: String,

    /// Audience - single string or array
    pub aud: Audience,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Login name; falls back to `sub`
    #[serde(default)]
    pub preferred_username: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Audience can be a single string or an array of strings in JWTs.
///
/// Membership of the configured audience is checked by `jsonwebtoken`; this
/// type only lets either shape deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl PlatformClaims {
    fn into_user(self) -> Result<AuthenticatedUser, AuthError> {
        let id = UserId::new(self.sub.clone()).map_err(|_| AuthError::InvalidToken)?;
        let username = self
            .preferred_username
            .filter(|u| !u.is_empty())
            .unwrap_or(self.sub);
        Ok(AuthenticatedUser::new(id, username, self.name))
    }
}

/// HS256 JWT validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = config.leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<PlatformClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!(error = %e, "Token issued for another service");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!(error = %e, "Token validation failed");
                    AuthError::InvalidToken
                }
            })?;

        data.claims.into_user()
    }
}
