//! Error types shared across bounded contexts.
//!
//! Ports speak `DomainError`; each bounded context maps it into its own
//! richer error enum (`BillingError`, `IdentityError`).

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    PlanNotFound,
    SubscriptionNotFound,
    UserNotFound,

    // Conflict errors
    ActiveSubscriptionExists,
    EmailInUse,

    // State errors
    InvalidState,

    // Authorization errors
    InvalidCredentials,
    Unauthorized,

    // Payment errors
    PaymentFailed,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::ActiveSubscriptionExists => "ACTIVE_SUBSCRIPTION_EXISTS",
            ErrorCode::EmailInUse => "EMAIL_IN_USE",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::PaymentFailed => "PAYMENT_FAILED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Broad classification of a failure, independent of the bounded context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value violated one of its rules. Always recoverable by the caller.
    Validation,
    /// The requested plan, subscription or user does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// A lifecycle mutator was called with an argument the current state rejects.
    State,
    /// Credentials or tokens were rejected.
    Unauthorized,
    /// Storage, gateway or other collaborator failure.
    Infrastructure,
}

impl ErrorCode {
    /// Returns the broad kind this code belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationFailed => ErrorKind::Validation,
            ErrorCode::PlanNotFound | ErrorCode::SubscriptionNotFound | ErrorCode::UserNotFound => {
                ErrorKind::NotFound
            }
            ErrorCode::ActiveSubscriptionExists | ErrorCode::EmailInUse => ErrorKind::Conflict,
            ErrorCode::InvalidState => ErrorKind::State,
            ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => ErrorKind::Unauthorized,
            ErrorCode::PaymentFailed | ErrorCode::DatabaseError | ErrorCode::InternalError => {
                ErrorKind::Infrastructure
            }
        }
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a database error from any displayable cause.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
