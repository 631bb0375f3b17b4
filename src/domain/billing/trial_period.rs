//! Free trial length in whole days.

use serde::Serialize;
use std::fmt;

use super::BillingError;

/// A trial of 1 to 30 days. Plans without a trial carry `None` rather than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TrialPeriod(u32);

impl TrialPeriod {
    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 30;

    pub fn try_new(days: u32) -> Result<Self, BillingError> {
        if days < Self::MIN_DAYS {
            return Err(BillingError::TrialPeriodTooShort);
        }
        if days > Self::MAX_DAYS {
            return Err(BillingError::TrialPeriodTooLong);
        }
        Ok(Self(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrialPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(TrialPeriod::try_new(1).unwrap().days(), 1);
        assert_eq!(TrialPeriod::try_new(30).unwrap().days(), 30);
    }

    #[test]
    fn zero_is_too_short() {
        assert!(matches!(
            TrialPeriod::try_new(0),
            Err(BillingError::TrialPeriodTooShort)
        ));
    }

    #[test]
    fn thirty_one_is_too_long() {
        let err = TrialPeriod::try_new(31).unwrap_err();
        assert!(matches!(err, BillingError::TrialPeriodTooLong));
        assert_eq!(err.to_string(), "trial period cannot exceed 30 days");
    }
}
