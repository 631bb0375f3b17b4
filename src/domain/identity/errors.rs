//! Identity-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ErrorKind, UserId};

/// Rules an email address can violate, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email is required")]
    Required,

    #[error("email exceeds maximum length of 320 characters")]
    TooLong,

    #[error("invalid email format: missing @ symbol or invalid position")]
    MissingAt,

    #[error("invalid email format: multiple @ symbols found")]
    MultipleAt,

    #[error("email local part exceeds maximum length of 64 characters")]
    LocalPartTooLong,

    #[error("email local part cannot contain consecutive dots")]
    LocalPartConsecutiveDots,

    #[error("email local part cannot start or end with a dot")]
    LocalPartDotBoundary,

    #[error("email local part contains invalid characters")]
    LocalPartInvalidCharacters,

    #[error("email domain exceeds maximum length of 255 characters")]
    DomainTooLong,

    #[error("email domain cannot start or end with a dot")]
    DomainDotBoundary,

    #[error("email domain cannot start or end with a hyphen")]
    DomainHyphenBoundary,

    #[error("email domain must contain at least one dot")]
    DomainMissingDot,

    #[error("email domain cannot contain consecutive dots")]
    DomainConsecutiveDots,

    #[error("email domain label exceeds maximum length of 63 characters")]
    LabelTooLong,

    #[error("email top-level domain must be at least 2 characters")]
    TopLevelDomainTooShort,

    #[error("email top-level domain must contain only letters")]
    TopLevelDomainNotLetters,

    #[error("email domain label cannot start or end with hyphen")]
    LabelHyphenBoundary,

    #[error("email domain label contains invalid characters")]
    LabelInvalidCharacters,
}

/// Rules a person's display name can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PersonNameError {
    #[error("name is required")]
    Required,

    #[error("name must be at least 2 characters long")]
    TooShort,

    #[error("name cannot exceed 255 characters")]
    TooLong,

    #[error("name must start with a letter")]
    MustStartWithLetter,

    #[error("name must end with a letter or digit")]
    MustEndWithLetterOrDigit,

    #[error("name cannot contain consecutive spaces")]
    ConsecutiveSpaces,

    #[error("name contains invalid characters (only letters, digits, spaces, hyphens, apostrophes, and periods are allowed)")]
    InvalidCharacters,

    #[error("name cannot contain more than 3 consecutive punctuation marks")]
    ExcessivePunctuation,
}

/// Password policy violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must be at least 8 characters long")]
    TooShort,

    #[error("password must contain at least one uppercase letter")]
    NoUppercase,

    #[error("password must contain at least one lowercase letter")]
    NoLowercase,

    #[error("password must contain at least one number")]
    NoNumber,

    #[error("password must contain at least one special character")]
    NoSpecialCharacter,
}

/// Identity-specific errors.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    InvalidName(#[from] PersonNameError),

    #[error(transparent)]
    InvalidPassword(#[from] PasswordError),

    #[error("password hash is required")]
    PasswordHashRequired,

    #[error("user ID is required")]
    UserIdRequired,

    #[error("email already in use")]
    EmailAlreadyInUse,

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user is not activated")]
    UserNotActivated,

    #[error("invalid token")]
    InvalidToken,

    #[error("{0}")]
    Repository(DomainError),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl IdentityError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        IdentityError::Infrastructure(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::InvalidEmail(_)
            | IdentityError::InvalidName(_)
            | IdentityError::InvalidPassword(_)
            | IdentityError::PasswordHashRequired
            | IdentityError::UserIdRequired => ErrorKind::Validation,
            IdentityError::EmailAlreadyInUse => ErrorKind::Conflict,
            IdentityError::UserNotFound(_) => ErrorKind::NotFound,
            IdentityError::InvalidCredentials
            | IdentityError::UserNotActivated
            | IdentityError::InvalidToken => ErrorKind::Unauthorized,
            IdentityError::Repository(inner) => inner.kind(),
            IdentityError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IdentityError::EmailAlreadyInUse => ErrorCode::EmailInUse,
            IdentityError::UserNotFound(_) => ErrorCode::UserNotFound,
            IdentityError::InvalidCredentials | IdentityError::UserNotActivated => {
                ErrorCode::InvalidCredentials
            }
            IdentityError::InvalidToken => ErrorCode::Unauthorized,
            IdentityError::Repository(inner) => inner.code,
            IdentityError::Infrastructure(_) => ErrorCode::InternalError,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

impl From<DomainError> for IdentityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmailInUse => IdentityError::EmailAlreadyInUse,
            ErrorCode::Unauthorized => IdentityError::InvalidToken,
            _ => IdentityError::Repository(err),
        }
    }
}

impl From<IdentityError> for DomainError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Repository(inner) => inner,
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_errors_display_their_own_message() {
        let err: IdentityError = EmailError::MultipleAt.into();
        assert_eq!(err.to_string(), "invalid email format: multiple @ symbols found");
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err: IdentityError = PasswordError::NoSpecialCharacter.into();
        assert_eq!(
            err.to_string(),
            "password must contain at least one special character"
        );
    }

    #[test]
    fn email_in_use_is_a_conflict() {
        assert_eq!(IdentityError::EmailAlreadyInUse.kind(), ErrorKind::Conflict);
        assert_eq!(IdentityError::EmailAlreadyInUse.code(), ErrorCode::EmailInUse);
        assert_eq!(IdentityError::EmailAlreadyInUse.to_string(), "email already in use");
    }

    #[test]
    fn credential_failures_are_unauthorized() {
        assert_eq!(IdentityError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(IdentityError::UserNotActivated.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn domain_conflicts_map_back_to_email_in_use() {
        let err: IdentityError =
            DomainError::new(ErrorCode::EmailInUse, "duplicate key").into();
        assert!(matches!(err, IdentityError::EmailAlreadyInUse));

        let err: IdentityError = DomainError::database("timeout").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
