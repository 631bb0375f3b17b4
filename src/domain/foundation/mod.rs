//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, error types and the base repository contract
//! shared by the billing and identity contexts.

mod errors;
mod ids;
mod repository;
mod text;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind};
pub use ids::{PlanId, SubscriptionId, UserId};
pub use repository::Repository;
pub use text::{is_decimal_digit, is_letter_or_digit};
pub use timestamp::Timestamp;
