//! GenerateTokenHandler - Command handler exchanging credentials for an
//! access token.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::UserId;
use crate::domain::identity::{Email, IdentityError};
use crate::ports::{AccountRepository, PasswordHasher, TokenIssuer};

#[derive(Debug, Clone)]
pub struct GenerateTokenCommand {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct GenerateTokenResult {
    pub user_id: UserId,
    pub token: String,
}

/// Handler for signing in.
///
/// Unknown emails and wrong passwords both report `InvalidCredentials`.
/// The activation check runs only after the password matched.
pub struct GenerateTokenHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl GenerateTokenHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: GenerateTokenCommand) -> Result<GenerateTokenResult, IdentityError> {
        let email = Email::try_new(&cmd.email)?;

        let account = self
            .accounts
            .find_by_email(&email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to look up account by email");
                IdentityError::from(e)
            })?
            .ok_or(IdentityError::InvalidCredentials)?;

        let hasher = Arc::clone(&self.hasher);
        let secret = cmd.password;
        let hash = account.password_hash().to_string();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(secret.expose_secret(), &hash))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                IdentityError::infrastructure("password verification task failed")
            })?;
        if !matches {
            tracing::debug!(user_id = %account.id(), "Password mismatch");
            return Err(IdentityError::InvalidCredentials);
        }
        if !account.is_activated() {
            return Err(IdentityError::UserNotActivated);
        }

        let token = self.tokens.issue(&account).map_err(|e| {
            tracing::error!(error = %e, user_id = %account.id(), "Failed to issue token");
            IdentityError::infrastructure(e.message)
        })?;

        tracing::info!(user_id = %account.id(), "Access token issued");

        Ok(GenerateTokenResult {
            user_id: account.id(),
            token,
        })
    }
}
