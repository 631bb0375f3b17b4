//! RegisterUserHandler - Command handler for opening an account.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::identity::{Email, IdentityError, Password, PersonName, UserAccount};
use crate::ports::{AccountRepository, PasswordHasher};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub account: UserAccount,
}

/// Handler for registering accounts.
///
/// New accounts start deactivated; see `ActivateUserHandler`.
pub struct RegisterUserHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, IdentityError> {
        // 1. Validate input
        PersonName::try_new(&cmd.name)?;
        let email = Email::try_new(&cmd.email)?;
        let password = Password::try_new(cmd.password.expose_secret())?;

        // 2. Email must be free
        let existing = self.accounts.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to look up account by email");
            IdentityError::from(e)
        })?;
        if existing.is_some() {
            tracing::warn!(domain = %email.domain(), "Registration with email already in use");
            return Err(IdentityError::EmailAlreadyInUse);
        }

        // 3. Hash off the async workers, then store
        let hasher = Arc::clone(&self.hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                IdentityError::infrastructure("password hashing task failed")
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                IdentityError::infrastructure(e.message)
            })?;
        let account = UserAccount::create(&cmd.name, email.as_str(), &hash)?;
        let account = self.accounts.create(account).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create account");
            IdentityError::from(e)
        })?;

        tracing::info!(user_id = %account.id(), "Account registered");

        Ok(RegisterUserResult { account })
    }
}
