//! Subscription status.
//!
//! Statuses form a flat set: any status may be replaced by any other through
//! an explicit update. Nothing reverts a status on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BillingError;

/// Lifecycle status of a subscription. New subscriptions start `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    /// Paid up and in service.
    Active,

    /// Paused without being cancelled.
    Inactive,

    /// Ended at the subscriber's request.
    Cancelled,

    /// Ran past its end date without renewal.
    Expired,

    /// A renewal charge failed.
    PastDue,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 5] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Inactive,
        SubscriptionStatus::Cancelled,
        SubscriptionStatus::Expired,
        SubscriptionStatus::PastDue,
    ];

    /// Parses a case-sensitive code such as `"PastDue"`.
    pub fn from_code(code: &str) -> Result<Self, BillingError> {
        match code {
            "Active" => Ok(SubscriptionStatus::Active),
            "Inactive" => Ok(SubscriptionStatus::Inactive),
            "Cancelled" => Ok(SubscriptionStatus::Cancelled),
            "Expired" => Ok(SubscriptionStatus::Expired),
            "PastDue" => Ok(SubscriptionStatus::PastDue),
            other => Err(BillingError::InvalidSubscriptionStatus(other.to_string())),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Inactive => "Inactive",
            SubscriptionStatus::Cancelled => "Cancelled",
            SubscriptionStatus::Expired => "Expired",
            SubscriptionStatus::PastDue => "PastDue",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
