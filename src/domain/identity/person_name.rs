//! Display name of a platform user.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::is_letter_or_digit;

use super::PersonNameError;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 255;
const MAX_CONSECUTIVE_PUNCTUATION: usize = 3;

/// A validated person name such as "Mary-Jane O'Neil" or "Dr. Who".
///
/// Starts with a letter, ends with a letter or digit, and contains only
/// letters, digits, single spaces, `-`, `'` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn try_new(raw: &str) -> Result<Self, PersonNameError> {
        let value = raw.trim();
        let chars: Vec<char> = value.chars().collect();

        match chars.len() {
            0 => return Err(PersonNameError::Required),
            n if n < MIN_LENGTH => return Err(PersonNameError::TooShort),
            n if n > MAX_LENGTH => return Err(PersonNameError::TooLong),
            _ => {}
        }

        if !chars.first().is_some_and(|c| c.is_alphabetic()) {
            return Err(PersonNameError::MustStartWithLetter);
        }
        if !chars
            .last()
            .is_some_and(|c| is_letter_or_digit(*c))
        {
            return Err(PersonNameError::MustEndWithLetterOrDigit);
        }
        if value.contains("  ") {
            return Err(PersonNameError::ConsecutiveSpaces);
        }
        let allowed = |c: &char| {
            is_letter_or_digit(*c) || matches!(c, ' ' | '-' | '\'' | '.')
        };
        if !chars.iter().all(allowed) {
            return Err(PersonNameError::InvalidCharacters);
        }

        let mut run = 0;
        for c in &chars {
            if matches!(c, '-' | '\'' | '.') {
                run += 1;
                if run > MAX_CONSECUTIVE_PUNCTUATION {
                    return Err(PersonNameError::ExcessivePunctuation);
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

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
