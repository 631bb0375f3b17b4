//! Email address value object.
//!
//! # Validation Rules
//!
//! - At most 320 bytes overall, exactly one `@` with text on both sides
//! - Local part: at most 64 bytes, no leading, trailing or doubled dots,
//!   letters, digits and ``!#$%&'*+-/=?^_`{|}~.`` only
//! - Domain: at most 255 bytes, no leading or trailing dot or hyphen, at
//!   least one dot and no doubled dots
//! - Each label at most 63 bytes; the last label is 2+ letters; other labels
//!   are letters, digits and inner hyphens

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::is_letter_or_digit;

use super::EmailError;

const MAX_LENGTH: usize = 320;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LENGTH: usize = 255;
const MAX_LABEL_LENGTH: usize = 63;
const MIN_TOP_LEVEL_LENGTH: usize = 2;

const LOCAL_PART_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~.";

/// A syntactically valid email address, stored as entered (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn try_new(raw: &str) -> Result<Self, EmailError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(EmailError::Required);
        }
        if value.len() > MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        let at = match value.find('@') {
            Some(index) if index > 0 && index < value.len() - 1 => index,
            _ => return Err(EmailError::MissingAt),
        };
        if value.matches('@').count() != 1 {
            return Err(EmailError::MultipleAt);
        }

        validate_local_part(&value[..at])?;
        validate_domain(&value[at + 1..])?;

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

fn validate_local_part(local: &str) -> Result<(), EmailError> {
    if local.len() > MAX_LOCAL_PART_LENGTH {
        return Err(EmailError::LocalPartTooLong);
    }
    if local.contains("..") {
        return Err(EmailError::LocalPartConsecutiveDots);
    }
    if local.starts_with('.') || local.ends_with('.') {
        return Err(EmailError::LocalPartDotBoundary);
    }
    let valid = local
        .chars()
        .all(|c| is_letter_or_digit(c) || LOCAL_PART_SPECIALS.contains(c));
    if !valid {
        return Err(EmailError::LocalPartInvalidCharacters);
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailError> {
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(EmailError::DomainTooLong);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(EmailError::DomainDotBoundary);
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return Err(EmailError::DomainHyphenBoundary);
    }
    if !domain.contains('.') {
        return Err(EmailError::DomainMissingDot);
    }
    if domain.contains("..") {
        return Err(EmailError::DomainConsecutiveDots);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let last = labels.len() - 1;
    for (index, label) in labels.iter().enumerate() {
        if label.len() > MAX_LABEL_LENGTH {
            return Err(EmailError::LabelTooLong);
        }
        if index == last {
            if label.chars().count() < MIN_TOP_LEVEL_LENGTH {
                return Err(EmailError::TopLevelDomainTooShort);
            }
            if !label.chars().all(char::is_alphabetic) {
                return Err(EmailError::TopLevelDomainNotLetters);
            }
        } else {
            if label.starts_with('-') || label.ends_with('-') {
                return Err(EmailError::LabelHyphenBoundary);
            }
            if !label
                .chars()
                .all(|c| is_letter_or_digit(c) || c == '-')
            {
                return Err(EmailError::LabelInvalidCharacters);
            }
        }
    }
    Ok(())
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
