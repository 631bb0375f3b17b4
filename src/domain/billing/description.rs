//! Plan description value object.
//!
//! Descriptions are optional: an empty (or whitespace-only) input is valid and
//! yields an empty description, which plans store as "no description".

use serde::Serialize;
use std::fmt;

use super::BillingError;

const MAX_LENGTH: usize = 1000;

/// A validated free-text plan description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a description, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// - `DescriptionTooLong` above 1000 characters
    /// - `DescriptionControlCharacters` for control characters other than `\n` and `\t`
    /// - `DescriptionInvalidCharacters` for other non-printable characters
    /// - `DescriptionExcessiveSpaces` for three or more spaces in a row
    pub fn try_new(raw: &str) -> Result<Self, BillingError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }

        if value.chars().count() > MAX_LENGTH {
            return Err(BillingError::DescriptionTooLong);
        }

        if value
            .chars()
            .any(|c| c.is_control() && c != '\n' && c != '\t')
        {
            return Err(BillingError::DescriptionControlCharacters);
        }

        if !value
            .chars()
            .all(|c| is_printable(c) || c == '\n' || c == '\t')
        {
            return Err(BillingError::DescriptionInvalidCharacters);
        }

        if value.contains("   ") {
            return Err(BillingError::DescriptionExcessiveSpaces);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// Other whitespace (NBSP, line separators), format characters such as
/// zero-width joiners, and private-use code points are not printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
    )
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_allowed() {
        assert!(Description::try_new("").unwrap().is_empty());
        assert!(Description::try_new(" \n ").unwrap().is_empty());
    }

    #[test]
    fn accepts_multiline_text_with_symbols() {
        let text = "Watch in 4K • up to 4 screens.\n\tIncludes: films, series & más!";
        assert_eq!(Description::try_new(text).unwrap().as_str(), text);
    }

    #[test]
    fn enforces_maximum_length() {
        assert!(Description::try_new(&"x".repeat(1000)).is_ok());
        assert!(matches!(
            Description::try_new(&"x".repeat(1001)),
            Err(BillingError::DescriptionTooLong)
        ));
    }

    #[test]
    fn allows_two_spaces_but_not_three() {
        assert!(Description::try_new("two  spaces").is_ok());
        assert!(matches!(
            Description::try_new("three   spaces"),
            Err(BillingError::DescriptionExcessiveSpaces)
        ));
    }

    #[test]
    fn rejects_control_characters_other_than_newline_and_tab() {
        assert!(matches!(
            Description::try_new("line\rbreak"),
            Err(BillingError::DescriptionControlCharacters)
        ));
        assert!(matches!(
            Description::try_new("bell\u{7}"),
            Err(BillingError::DescriptionControlCharacters)
        ));
    }

    #[test]
    fn rejects_non_printable_characters() {
        assert!(matches!(
            Description::try_new("zero\u{200B}width"),
            Err(BillingError::DescriptionInvalidCharacters)
        ));
        assert!(matches!(
            Description::try_new("no\u{00A0}break"),
            Err(BillingError::DescriptionInvalidCharacters)
        ));
    }
}
