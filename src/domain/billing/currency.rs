//! ISO-4217 currency value object.

use serde::{Serialize, Serializer};
use std::fmt;

use super::iso4217::{self, CurrencyInfo};
use super::BillingError;

const CODE_LENGTH: usize = 3;

/// A currency known to the ISO-4217 table, carrying its reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    info: &'static CurrencyInfo,
}

impl Currency {
    /// Resolves a three-letter code such as `"USD"`.
    ///
    /// Surrounding whitespace is ignored; the code itself is case-sensitive.
    ///
    /// # Errors
    ///
    /// - `CurrencyCodeEmpty` for empty or whitespace-only input
    /// - `CurrencyCodeInvalidLength` unless exactly 3 characters remain
    /// - `InvalidCurrencyCode` for codes missing from the table
    pub fn try_new(raw: &str) -> Result<Self, BillingError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(BillingError::CurrencyCodeEmpty);
        }
        if code.len() != CODE_LENGTH {
            return Err(BillingError::CurrencyCodeInvalidLength);
        }
        iso4217::lookup(code)
            .map(|info| Self { info })
            .ok_or_else(|| BillingError::InvalidCurrencyCode(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.info.code
    }

    pub fn country(&self) -> &'static str {
        self.info.country
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn numeric_code(&self) -> &'static str {
        self.info.numeric_code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.info.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_resolves_to_its_reference_row() {
        let usd = Currency::try_new("USD").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.country(), "AMERICAN SAMOA");
        assert_eq!(usd.name(), "US Dollar");
        assert_eq!(usd.numeric_code(), "840");
    }

    #[test]
    fn eur_keeps_non_ascii_country_name() {
        let eur = Currency::try_new(" EUR ").unwrap();
        assert_eq!(eur.country(), "ÅLAND ISLANDS");
        assert_eq!(eur.numeric_code(), "978");
    }

    #[test]
    fn empty_input_is_reported_as_empty() {
        assert!(matches!(Currency::try_new(""), Err(BillingError::CurrencyCodeEmpty)));
        assert!(matches!(Currency::try_new("  "), Err(BillingError::CurrencyCodeEmpty)));
    }

    #[test]
    fn wrong_length_is_rejected_before_lookup() {
        assert!(matches!(
            Currency::try_new("US"),
            Err(BillingError::CurrencyCodeInvalidLength)
        ));
        assert!(matches!(
            Currency::try_new("USDX"),
            Err(BillingError::CurrencyCodeInvalidLength)
        ));
    }

    #[test]
    fn unknown_and_lowercase_codes_are_invalid() {
        assert!(matches!(
            Currency::try_new("XYZ"),
            Err(BillingError::InvalidCurrencyCode(ref c)) if c == "XYZ"
        ));
        assert!(matches!(
            Currency::try_new("usd"),
            Err(BillingError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn serializes_as_code() {
        let gbp = Currency::try_new("GBP").unwrap();
        assert_eq!(serde_json::to_string(&gbp).unwrap(), "\"GBP\"");
    }
}
