use std::num::IntErrorKind;

pub use crate::error::ValidationError;

/// The shortest password that can be requested.
pub const MIN_LENGTH: usize = 4;
/// The longest password that can be requested.
pub const MAX_LENGTH: usize = 16;
/// The length suggested when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 8;

/// A password length that has passed validation, always within
/// `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub fn new(length: usize) -> Result<PasswordLength, ValidationError> {
        if length < MIN_LENGTH {
            Err(ValidationError::TooShort)
        } else if length > MAX_LENGTH {
            Err(ValidationError::TooLong)
        } else {
            Ok(PasswordLength(length))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        PasswordLength(DEFAULT_LENGTH)
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = ValidationError;

    fn try_from(length: i64) -> Result<Self, Self::Error> {
        if length < MIN_LENGTH as i64 {
            return Err(ValidationError::TooShort);
        }
        // the lower bound is checked above, so the cast can't wrap
        PasswordLength::new(length as usize)
    }
}

impl From<PasswordLength> for usize {
    fn from(length: PasswordLength) -> Self {
        length.0
    }
}

impl std::fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a length as typed by the user.
///
/// Surrounding whitespace is ignored. Anything that isn't a whole number is
/// reported as `Required`, numbers outside of the allowed range as
/// `TooShort` or `TooLong`, even when they don't fit in an `i64`.
pub fn validate_length(raw: &str) -> Result<PasswordLength, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    match raw.parse::<i64>() {
        Ok(length) => PasswordLength::try_from(length),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(ValidationError::TooLong),
            IntErrorKind::NegOverflow => Err(ValidationError::TooShort),
            _ => Err(ValidationError::Required),
        },
    }
}

#[cfg(test)]
#[path = "tests/length.rs"]
mod length_tests;
