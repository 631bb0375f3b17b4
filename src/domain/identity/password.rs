//! Plaintext password that satisfies the account password policy.
//!
//! The plaintext lives only long enough to be hashed and is never logged.

use secrecy::{ExposeSecret, SecretString};

use super::PasswordError;

const MIN_LENGTH: usize = 8;

/// A policy-compliant password: 8+ characters with an uppercase letter, a
/// lowercase letter, a digit and a special character.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    /// Checks the policy. Whitespace is kept as typed.
    pub fn try_new(raw: &str) -> Result<Self, PasswordError> {
        if raw.chars().count() < MIN_LENGTH {
            return Err(PasswordError::TooShort);
        }
        if !raw.chars().any(char::is_uppercase) {
            return Err(PasswordError::NoUppercase);
        }
        if !raw.chars().any(char::is_lowercase) {
            return Err(PasswordError::NoLowercase);
        }
        if !raw.chars().any(char::is_numeric) {
            return Err(PasswordError::NoNumber);
        }
        if !raw
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            return Err(PasswordError::NoSpecialCharacter);
        }
        Ok(Self(SecretString::new(raw.to_string())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
