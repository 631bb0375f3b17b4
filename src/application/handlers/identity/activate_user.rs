//! ActivateUserHandler - Command handler enabling sign-in for an account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::identity::{IdentityError, UserAccount};
use crate::ports::AccountRepository;

#[derive(Debug, Clone, Copy)]
pub struct ActivateUserCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct ActivateUserResult {
    pub account: UserAccount,
    /// False when the account was already active.
    pub changed: bool,
}

pub struct ActivateUserHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl ActivateUserHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub async fn handle(&self, cmd: ActivateUserCommand) -> Result<ActivateUserResult, IdentityError> {
        if !cmd.user_id.is_persisted() {
            return Err(IdentityError::UserIdRequired);
        }
        let mut account = self
            .accounts
            .find_by_id(cmd.user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %cmd.user_id, "Failed to load account");
                IdentityError::from(e)
            })?
            .ok_or(IdentityError::UserNotFound(cmd.user_id))?;

        if account.is_activated() {
            return Ok(ActivateUserResult {
                account,
                changed: false,
            });
        }

        account.activate();
        self.accounts.update(&account).await.map_err(|e| {
            tracing::error!(error = %e, user_id = %cmd.user_id, "Failed to activate account");
            IdentityError::from(e)
        })?;

        tracing::info!(user_id = %account.id(), "Account activated");

        Ok(ActivateUserResult {
            account,
            changed: true,
        })
    }
}
