//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BVL_FEEDBACK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bvl_feedback::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (MySQL connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BVL_FEEDBACK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BVL_FEEDBACK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BVL_FEEDBACK__DATABASE__URL=...` -> `database.url = ...`
    /// - `BVL_FEEDBACK__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or unparsable.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BVL_FEEDBACK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("BVL_FEEDBACK__DATABASE__URL", "mysql://loris@localhost/LORIS");
        env::set_var("BVL_FEEDBACK__AUTH__JWT_SECRET", "dev-secret");
        env::set_var("BVL_FEEDBACK__AUTH__ISSUER", "https://loris.example.org");
        env::set_var("BVL_FEEDBACK__AUTH__AUDIENCE", "bvl-feedback");
    }

    fn clear_env() {
        env::remove_var("BVL_FEEDBACK__DATABASE__URL");
        env::remove_var("BVL_FEEDBACK__AUTH__JWT_SECRET");
        env::remove_var("BVL_FEEDBACK__AUTH__ISSUER");
        env::remove_var("BVL_FEEDBACK__AUTH__AUDIENCE");
        env::remove_var("BVL_FEEDBACK__SERVER__PORT");
        env::remove_var("BVL_FEEDBACK__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.database.url.expose_secret(),
            "mysql://loris@localhost/LORIS"
        );
        assert_eq!(config.auth.audience, "bvl-feedback");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BVL_FEEDBACK__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::JwtSecretTooShort));
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BVL_FEEDBACK__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_missing_database_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BVL_FEEDBACK__AUTH__JWT_SECRET", "dev-secret");
        env::set_var("BVL_FEEDBACK__AUTH__ISSUER", "https://loris.example.org");
        env::set_var("BVL_FEEDBACK__AUTH__AUDIENCE", "bvl-feedback");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
