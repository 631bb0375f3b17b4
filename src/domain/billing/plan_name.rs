//! Plan name value object.
//!
//! # Validation Rules
//!
//! Checked in this order after trimming surrounding whitespace:
//!
//! 1. Not empty, then 2-100 characters (counted as Unicode scalars)
//! 2. First and last character are a letter or digit
//! 3. No two consecutive spaces
//! 4. Only letters, digits, spaces, `-`, `_` and `.`
//! 5. At most 2 punctuation marks (`-`, `_`, `.`) in a row

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::is_letter_or_digit;

use super::BillingError;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 100;
const MAX_CONSECUTIVE_PUNCTUATION: usize = 2;

/// A validated plan name such as "Premium HD" or "family_plan.v2".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlanName(String);

impl PlanName {
    /// Creates a plan name, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns the `BillingError::Name*` variant for the first rule violated.
    pub fn try_new(raw: &str) -> Result<Self, BillingError> {
        let value = raw.trim();
        let chars: Vec<char> = value.chars().collect();

        match chars.len() {
            0 => return Err(BillingError::NameRequired),
            n if n < MIN_LENGTH => return Err(BillingError::NameTooShort),
            n if n > MAX_LENGTH => return Err(BillingError::NameTooLong),
            _ => {}
        }

        if !chars.first().is_some_and(|c| is_letter_or_digit(*c)) {
            return Err(BillingError::NameMustStartWithLetterOrDigit);
        }
        if !chars.last().is_some_and(|c| is_letter_or_digit(*c)) {
            return Err(BillingError::NameMustEndWithLetterOrDigit);
        }

        if value.contains("  ") {
            return Err(BillingError::NameConsecutiveSpaces);
        }

        if !chars.iter().all(|c| is_allowed(*c)) {
            return Err(BillingError::NameInvalidCharacters);
        }

        let mut run = 0;
        for c in &chars {
            if is_punctuation(*c) {
                run += 1;
                if run > MAX_CONSECUTIVE_PUNCTUATION {
                    return Err(BillingError::NameExcessivePunctuation);
                }
            } else {
                run = 0;
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

fn is_allowed(c: char) -> bool {
    is_letter_or_digit(c) || c == ' ' || is_punctuation(c)
}

impl fmt::Display for PlanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PlanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["Basic", "Premium HD", "family_plan.v2", "4K Ultra-Plus", "Básico"] {
            assert!(PlanName::try_new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PlanName::try_new("  Premium  ").unwrap();
        assert_eq!(name.as_str(), "Premium");
    }

    #[test]
    fn empty_and_whitespace_only_are_required_errors() {
        assert!(matches!(PlanName::try_new(""), Err(BillingError::NameRequired)));
        assert!(matches!(PlanName::try_new("   "), Err(BillingError::NameRequired)));
    }

    #[test]
    fn enforces_length_bounds() {
        assert!(matches!(PlanName::try_new("A"), Err(BillingError::NameTooShort)));
        assert!(PlanName::try_new("AB").is_ok());
        assert!(PlanName::try_new(&"a".repeat(100)).is_ok());
        assert!(matches!(
            PlanName::try_new(&"a".repeat(101)),
            Err(BillingError::NameTooLong)
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(PlanName::try_new(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn boundaries_must_be_letters_or_digits() {
        assert!(matches!(
            PlanName::try_new("-Basic"),
            Err(BillingError::NameMustStartWithLetterOrDigit)
        ));
        assert!(matches!(
            PlanName::try_new("Basic."),
            Err(BillingError::NameMustEndWithLetterOrDigit)
        ));
    }

    #[test]
    fn rejects_consecutive_spaces() {
        assert!(matches!(
            PlanName::try_new("Premium  HD"),
            Err(BillingError::NameConsecutiveSpaces)
        ));
    }

    #[test]
    fn rejects_characters_outside_the_allowed_set() {
        assert!(matches!(
            PlanName::try_new("Premium+HD"),
            Err(BillingError::NameInvalidCharacters)
        ));
        assert!(matches!(
            PlanName::try_new("Plan\tB"),
            Err(BillingError::NameInvalidCharacters)
        ));
    }

    #[test]
    fn allows_two_punctuation_marks_but_not_three() {
        assert!(PlanName::try_new("Plan-_A").is_ok());
        assert!(matches!(
            PlanName::try_new("Plan-_.A"),
            Err(BillingError::NameExcessivePunctuation)
        ));
    }

    #[test]
    fn only_decimal_digits_count_as_digits() {
        assert!(matches!(
            PlanName::try_new("Plan ½"),
            Err(BillingError::NameMustEndWithLetterOrDigit)
        ));
        assert!(matches!(
            PlanName::try_new("HD²"),
            Err(BillingError::NameMustEndWithLetterOrDigit)
        ));
        assert!(matches!(
            PlanName::try_new("Tier ¾ Max"),
            Err(BillingError::NameInvalidCharacters)
        ));
        assert!(PlanName::try_new("Plan ٣").is_ok());
    }
}
