// ABOUTME: Validated App Service slot name.
// ABOUTME: Lowercase alphanumeric plus hyphens, with the conventional production slot special-cased.

use std::fmt;
use thiserror::Error;

/// Conventional name for the default slot; commands targeting it omit the
/// slot qualifier entirely.
pub const PRODUCTION_SLOT: &str = "production";

#[derive(Debug, Error)]
pub enum SlotNameError {
    #[error("slot name cannot be empty")]
    Empty,

    #[error("slot name exceeds maximum length of 59 characters")]
    TooLong,

    #[error("slot name cannot start with a hyphen")]
    StartsWithHyphen,

    #[error("slot name cannot end with a hyphen")]
    EndsWithHyphen,

    #[error("slot name must be lowercase")]
    NotLowercase,

    #[error("invalid character in slot name: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotName(String);

impl SlotName {
    pub fn new(value: &str) -> Result<Self, SlotNameError> {
        if value.is_empty() {
            return Err(SlotNameError::Empty);
        }

        if value.len() > 59 {
            return Err(SlotNameError::TooLong);
        }

        if value.starts_with('-') {
            return Err(SlotNameError::StartsWithHyphen);
        }

        if value.ends_with('-') {
            return Err(SlotNameError::EndsWithHyphen);
        }

        for c in value.chars() {
            if c.is_ascii_uppercase() {
                return Err(SlotNameError::NotLowercase);
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
                return Err(SlotNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    /// The conventional default slot.
    pub fn production() -> Self {
        Self(PRODUCTION_SLOT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the conventional default slot, addressed without a
    /// slot qualifier.
    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION_SLOT
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
