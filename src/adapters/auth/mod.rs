//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - Shared-secret HS256 tokens issued by the platform
//! - `mock` - Test implementation that doesn't require a token issuer

mod jwt;
mod mock;

pub use jwt::{Audience, JwtSessionValidator, PlatformClaims};
pub use mock::MockSessionValidator;
