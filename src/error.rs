use std::{
    io,
    sync::{MutexGuard, PoisonError},
};

use crate::session::SessionState;

/// The reasons a requested password length can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No value, or a value that isn't a whole number.
    Required,
    /// Below the minimum length.
    TooShort,
    /// Above the maximum length.
    TooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "Length is required"),
            Self::TooShort => write!(f, "Should be min of 4 characters"),
            Self::TooLong => write!(f, "Should be max of 16 characters"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    EmptyAlphabet,
    Clipboard(arboard::Error),
    Io(io::Error),
    Generic(&'static str),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Self::Clipboard(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl From<PoisonError<MutexGuard<'_, SessionState>>> for Error {
    fn from(_err: PoisonError<MutexGuard<'_, SessionState>>) -> Self {
        Self::Generic("Error obtaining lock")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmptyAlphabet => write!(f, "At least one character category must be selected"),
            Self::Clipboard(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "tests/error.rs"]
mod error_tests;
