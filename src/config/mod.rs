//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `BILLING` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use subscription_billing::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod telemetry;

pub use auth::{AuthConfig, MIN_JWT_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection pool
    pub database: DatabaseConfig,

    /// Access-token signing
    pub auth: AuthConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `BILLING` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// `BILLING__DATABASE__URL=...` sets `database.url`,
    /// `BILLING__AUTH__TOKEN_TTL_SECS=900` sets `auth.token_ttl_secs`.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a required variable is missing or a
    /// value does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BILLING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads and validates in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.auth.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
