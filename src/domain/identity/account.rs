//! User account as seen by the billing platform: who the user is and how
//! they prove it.

use crate::domain::foundation::{Timestamp, UserId};

use super::{Email, IdentityError, PersonName};

/// A registered user with a hashed password.
///
/// Accounts start deactivated and must be activated before they can
/// obtain access tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    id: UserId,
    name: PersonName,
    email: Email,
    password_hash: String,
    activated: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserAccount {
    /// Registers a new, not yet persisted and not yet activated account.
    pub fn create(name: &str, email: &str, password_hash: &str) -> Result<Self, IdentityError> {
        let password_hash = password_hash.trim();
        if password_hash.is_empty() {
            return Err(IdentityError::PasswordHashRequired);
        }
        let name = PersonName::try_new(name)?;
        let email = Email::try_new(email)?;
        let now = Timestamp::now();
        Ok(Self {
            id: UserId::UNASSIGNED,
            name,
            email,
            password_hash: password_hash.to_string(),
            activated: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a stored account.
    pub fn restore(
        id: UserId,
        name: &str,
        email: &str,
        password_hash: &str,
        activated: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, IdentityError> {
        if !id.is_persisted() {
            return Err(IdentityError::UserIdRequired);
        }
        let mut account = Self::create(name, email, password_hash)?;
        account.id = id;
        account.activated = activated;
        account.created_at = created_at;
        account.updated_at = updated_at;
        Ok(account)
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn activate(&mut self) {
        self.activated = true;
        self.updated_at = Timestamp::now();
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
