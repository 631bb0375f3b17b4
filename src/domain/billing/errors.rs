//! Billing-specific error types.
//!
//! Every rule a value object or aggregate can violate has its own variant, so
//! callers can tell "plan name too short" from "invalid currency code" without
//! parsing messages.
//!
//! # Kind Mapping
//!
//! | Variants | Kind |
//! |----------|------|
//! | Name*, Description*, Amount*, Currency*, TrialPeriod*, Invalid*, *Required | Validation |
//! | PlanNotFound, SubscriptionNotFound | NotFound |
//! | ActiveSubscriptionExists | Conflict |
//! | EndDateBeforeStartDate, InvalidState, AutoRenewDisabled | State |
//! | PaymentFailed, Repository, Infrastructure | Infrastructure (or the wrapped kind) |

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, ErrorKind, PlanId, SubscriptionId, UserId,
};

/// Billing-specific errors.
#[derive(Debug, Clone, Error)]
pub enum BillingError {
    // Plan name
    #[error("plan name is required")]
    NameRequired,

    #[error("plan name must be at least 2 characters long")]
    NameTooShort,

    #[error("plan name cannot exceed 100 characters")]
    NameTooLong,

    #[error("plan name must start with a letter or digit")]
    NameMustStartWithLetterOrDigit,

    #[error("plan name must end with a letter or digit")]
    NameMustEndWithLetterOrDigit,

    #[error("plan name cannot contain consecutive spaces")]
    NameConsecutiveSpaces,

    #[error("plan name contains invalid characters (only letters, digits, spaces, hyphens, underscores, and periods are allowed)")]
    NameInvalidCharacters,

    #[error("plan name cannot contain more than 2 consecutive punctuation marks")]
    NameExcessivePunctuation,

    // Description
    #[error("description cannot exceed 1000 characters")]
    DescriptionTooLong,

    #[error("description cannot contain control characters")]
    DescriptionControlCharacters,

    #[error("description contains invalid characters (only printable characters are allowed)")]
    DescriptionInvalidCharacters,

    #[error("description cannot contain more than 2 consecutive spaces")]
    DescriptionExcessiveSpaces,

    // Amount
    #[error("amount exceeds maximum allowed value")]
    AmountExceedsMaximum,

    // Currency
    #[error("currency code cannot be empty")]
    CurrencyCodeEmpty,

    #[error("currency code must be exactly 3 characters")]
    CurrencyCodeInvalidLength,

    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    // Trial period
    #[error("trial period must be at least 1 day")]
    TrialPeriodTooShort,

    #[error("trial period cannot exceed 30 days")]
    TrialPeriodTooLong,

    // Enumerations
    #[error("invalid plan interval: {0}")]
    InvalidPlanInterval(String),

    #[error("invalid subscription status: {0}")]
    InvalidSubscriptionStatus(String),

    // Identity and dates
    #[error("plan ID is required")]
    PlanIdRequired,

    #[error("subscription ID is required")]
    SubscriptionIdRequired,

    #[error("user ID is required")]
    UserIdRequired,

    #[error("start date is required")]
    StartDateRequired,

    #[error("end date cannot be before start date")]
    EndDateBeforeStartDate,

    // Lookups
    #[error("plan not found: {0}")]
    PlanNotFound(PlanId),

    #[error("subscription not found: {0}")]
    SubscriptionNotFound(SubscriptionId),

    // Conflicts
    #[error("user already has an active subscription: {0}")]
    ActiveSubscriptionExists(UserId),

    // Lifecycle
    #[error("cannot {attempted} subscription in {current} state")]
    InvalidState { current: String, attempted: String },

    #[error("subscription {0} is not set to auto-renew")]
    AutoRenewDisabled(SubscriptionId),

    // Collaborators
    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },

    #[error("{0}")]
    Repository(DomainError),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl BillingError {
    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        BillingError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn payment_failed(reason: impl Into<String>) -> Self {
        BillingError::PaymentFailed {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::PlanNotFound(_) | BillingError::SubscriptionNotFound(_) => {
                ErrorKind::NotFound
            }
            BillingError::ActiveSubscriptionExists(_) => ErrorKind::Conflict,
            BillingError::EndDateBeforeStartDate
            | BillingError::InvalidState { .. }
            | BillingError::AutoRenewDisabled(_) => ErrorKind::State,
            BillingError::PaymentFailed { .. } | BillingError::Infrastructure(_) => {
                ErrorKind::Infrastructure
            }
            BillingError::Repository(inner) => inner.kind(),
            _ => ErrorKind::Validation,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            BillingError::SubscriptionNotFound(_) => ErrorCode::SubscriptionNotFound,
            BillingError::ActiveSubscriptionExists(_) => ErrorCode::ActiveSubscriptionExists,
            BillingError::EndDateBeforeStartDate
            | BillingError::InvalidState { .. }
            | BillingError::AutoRenewDisabled(_) => ErrorCode::InvalidState,
            BillingError::PaymentFailed { .. } => ErrorCode::PaymentFailed,
            BillingError::Infrastructure(_) => ErrorCode::InternalError,
            BillingError::Repository(inner) => inner.code,
            _ => ErrorCode::ValidationFailed,
        }
    }

    /// True for rule violations the caller can fix by changing its input.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            BillingError::PaymentFailed { .. } | BillingError::Infrastructure(_) => true,
            BillingError::Repository(inner) => inner.code == ErrorCode::DatabaseError,
            _ => false,
        }
    }
}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        BillingError::Repository(err)
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Repository(inner) => inner,
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_rule() {
        assert_eq!(
            BillingError::NameTooShort.to_string(),
            "plan name must be at least 2 characters long"
        );
        assert_eq!(
            BillingError::TrialPeriodTooLong.to_string(),
            "trial period cannot exceed 30 days"
        );
        assert_eq!(
            BillingError::DescriptionTooLong.to_string(),
            "description cannot exceed 1000 characters"
        );
        assert_eq!(
            BillingError::InvalidCurrencyCode("XYZ".into()).to_string(),
            "invalid currency code: XYZ"
        );
    }

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(BillingError::AmountExceedsMaximum.kind(), ErrorKind::Validation);
        assert_eq!(
            BillingError::PlanNotFound(PlanId::new(3)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BillingError::ActiveSubscriptionExists(UserId::new(1)).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(BillingError::EndDateBeforeStartDate.kind(), ErrorKind::State);
        assert_eq!(
            BillingError::infrastructure("db down").kind(),
            ErrorKind::Infrastructure
        );
    }

    #[test]
    fn codes_map_to_domain_codes() {
        assert_eq!(
            BillingError::ActiveSubscriptionExists(UserId::new(1)).code(),
            ErrorCode::ActiveSubscriptionExists
        );
        assert_eq!(BillingError::NameRequired.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            BillingError::invalid_state("Cancelled", "renew").code(),
            ErrorCode::InvalidState
        );
    }

    #[test]
    fn repository_errors_keep_their_code() {
        let err: BillingError = DomainError::database("connection reset").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.is_retryable());

        let back: DomainError = err.into();
        assert_eq!(back.code, ErrorCode::DatabaseError);
        assert_eq!(back.message, "connection reset");
    }

    #[test]
    fn domain_errors_from_billing_carry_the_message() {
        let err: DomainError = BillingError::SubscriptionNotFound(SubscriptionId::new(8)).into();
        assert_eq!(err.code, ErrorCode::SubscriptionNotFound);
        assert_eq!(err.message, "subscription not found: 8");
    }

    #[test]
    fn only_collaborator_failures_are_retryable() {
        assert!(BillingError::payment_failed("declined").is_retryable());
        assert!(!BillingError::NameTooLong.is_retryable());
        assert!(!BillingError::ActiveSubscriptionExists(UserId::new(1)).is_retryable());
    }
}
