//! Monetary amount in minor currency units (cents).

use serde::Serialize;
use std::fmt;

use super::BillingError;

/// A non-negative price in minor units, at most `Amount::MAX_CENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Largest accepted amount: 9,999,999.99 in a two-decimal currency.
    pub const MAX_CENTS: u64 = 999_999_999;

    pub fn try_new(cents: u64) -> Result<Self, BillingError> {
        if cents > Self::MAX_CENTS {
            return Err(BillingError::AmountExceedsMaximum);
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
