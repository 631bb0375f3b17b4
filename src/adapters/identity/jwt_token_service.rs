//! HS256 access tokens.
//!
//! One service both issues tokens and resolves them back to a `UserId`, so
//! the billing side never sees token internals.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::identity::UserAccount;
use crate::ports::{IdentityProvider, TokenIssuer};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iss: String,
    iat: i64,
    exp: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &SecretString, issuer: impl Into<String>, ttl: Duration) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.issuer.clone(), config.token_ttl())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

fn unauthorized(message: &str) -> DomainError {
    DomainError::new(ErrorCode::Unauthorized, message)
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, account: &UserAccount) -> Result<String, DomainError> {
        if !account.id().is_persisted() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "cannot issue a token for an unsaved account",
            ));
        }
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: account.id().to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to sign token: {}", e))
        })
    }
}

#[async_trait]
impl IdentityProvider for JwtTokenService {
    async fn resolve(&self, token: &str) -> Result<UserId, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    unauthorized("token expired")
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    unauthorized("invalid token")
                }
                _ => {
                    tracing::warn!(error = %e, "Token validation failed");
                    unauthorized("invalid token")
                }
            }
        })?;

        let user_id: UserId = data.claims.sub.parse().map_err(|_| {
            tracing::warn!(sub = %data.claims.sub, "Token subject is not a user id");
            unauthorized("invalid token")
        })?;
        if !user_id.is_persisted() {
            return Err(unauthorized("invalid token"));
        }
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(
            &secret("an-adequately-long-test-signing-secret"),
            "billing",
            Duration::from_secs(3600),
        )
    }

    fn account(id: u64) -> UserAccount {
        UserAccount::create("Ada Lovelace", "ada@example.com", "$argon2id$stub")
            .unwrap()
            .with_id(UserId::new(id))
    }

    fn forge(claims: &Claims, key: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn issued_token_resolves_to_account_id() {
        let service = service();

        let token = service.issue(&account(42)).unwrap();

        assert_eq!(service.resolve(&token).await.unwrap(), UserId::new(42));
    }

    #[test]
    fn unsaved_account_gets_no_token() {
        let err = service().issue(&account(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(
            &secret("a-completely-different-signing-secret!"),
            "billing",
            Duration::from_secs(3600),
        );
        let token = other.issue(&account(1)).unwrap();

        let err = service().resolve(&token).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let token = forge(
            &Claims {
                sub: "1".into(),
                iss: "billing".into(),
                iat: now - 7200,
                exp: now - 3600,
            },
            "an-adequately-long-test-signing-secret",
        );

        let err = service().resolve(&token).await.unwrap_err();

        assert_eq!(err.message, "token expired");
    }

    #[tokio::test]
    async fn foreign_issuer_is_rejected() {
        let now = Utc::now().timestamp();
        let token = forge(
            &Claims {
                sub: "1".into(),
                iss: "someone-else".into(),
                iat: now,
                exp: now + 600,
            },
            "an-adequately-long-test-signing-secret",
        );

        assert!(service().resolve(&token).await.is_err());
    }

    #[tokio::test]
    async fn non_numeric_or_zero_subject_is_rejected() {
        let now = Utc::now().timestamp();
        for sub in ["alice", "0"] {
            let token = forge(
                &Claims {
                    sub: sub.into(),
                    iss: "billing".into(),
                    iat: now,
                    exp: now + 600,
                },
                "an-adequately-long-test-signing-secret",
            );
            let err = service().resolve(&token).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::Unauthorized);
        }
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        assert!(service().resolve("not.a.jwt").await.is_err());
    }
}
