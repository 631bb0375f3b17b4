//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Access-token signing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: SecretString,

    /// `iss` claim written into and required from every token
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_BYTES));
        }
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ISSUER"));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            issuer: default_issuer(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_issuer() -> String {
    "subscription-billing".to_string()
}

fn default_token_ttl() -> u64 {
    3600
}
