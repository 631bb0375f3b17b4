//! Identity ports.
//!
//! Billing depends on identity only through [`IdentityProvider`], which turns
//! an access token into the caller's `UserId`. The remaining ports back the
//! registration and token-issuing use cases.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::identity::{Email, UserAccount};

/// Resolves a bearer token to the user it was issued for.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// # Errors
    ///
    /// `UNAUTHORIZED` for malformed, expired or foreign tokens.
    async fn resolve(&self, token: &str) -> Result<UserId, DomainError>;
}

/// Issues access tokens for authenticated accounts.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &UserAccount) -> Result<String, DomainError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing hash string.
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// True if `plaintext` matches `hash`. Malformed hashes never match.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Account storage.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// `EMAIL_IN_USE` if another account already uses the email.
    async fn create(&self, account: UserAccount) -> Result<UserAccount, DomainError>;

    /// Replaces a stored account. Fails with `USER_NOT_FOUND` for unknown ids.
    async fn update(&self, account: &UserAccount) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DomainError>;
}
