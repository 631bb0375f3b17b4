//! Billing interval of a plan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BillingError;

/// How often a plan bills.
///
/// String codes are case-sensitive: `"Month"` parses, `"month"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanInterval {
    Day,
    Week,
    Month,
    Year,
}

impl PlanInterval {
    /// Every interval, in ascending length.
    pub const ALL: [PlanInterval; 4] = [
        PlanInterval::Day,
        PlanInterval::Week,
        PlanInterval::Month,
        PlanInterval::Year,
    ];

    /// Parses a code such as `"Week"`.
    pub fn from_code(code: &str) -> Result<Self, BillingError> {
        match code {
            "Day" => Ok(PlanInterval::Day),
            "Week" => Ok(PlanInterval::Week),
            "Month" => Ok(PlanInterval::Month),
            "Year" => Ok(PlanInterval::Year),
            other => Err(BillingError::InvalidPlanInterval(other.to_string())),
        }
    }

    /// The storage and wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            PlanInterval::Day => "Day",
            PlanInterval::Week => "Week",
            PlanInterval::Month => "Month",
            PlanInterval::Year => "Year",
        }
    }
}

impl fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for PlanInterval {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for interval in PlanInterval::ALL {
            assert_eq!(PlanInterval::from_code(interval.as_code()).unwrap(), interval);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(matches!(
            "day".parse::<PlanInterval>(),
            Err(BillingError::InvalidPlanInterval(ref c)) if c == "day"
        ));
    }

    #[test]
    fn rejects_unknown_and_empty_codes() {
        assert!(PlanInterval::from_code("InvalidInterval").is_err());
        assert!(PlanInterval::from_code("").is_err());
    }

    #[test]
    fn serde_uses_the_code() {
        assert_eq!(serde_json::to_string(&PlanInterval::Month).unwrap(), "\"Month\"");
        let parsed: PlanInterval = serde_json::from_str("\"Year\"").unwrap();
        assert_eq!(parsed, PlanInterval::Year);
    }
}
