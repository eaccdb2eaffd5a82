//! This is the library part of passgen, it builds random passwords from a selectable set of
//! character categories and keeps track of one interactive generation session.
//!
//! ```
//! use passgen::{Category, SessionState};
//!
//! let mut session = SessionState::new();
//! session.toggle(Category::Lowercase);
//! session.toggle(Category::Numbers);
//!
//! let password = session.generate("12").unwrap();
//! assert_eq!(password.len(), 12);
//! ```

/// Alphabet construction from the enabled categories.
pub mod alphabet;
/// The four character categories and the set of enabled ones.
pub mod category;
pub mod error;
/// Validation of the requested password length.
pub mod length;
/// Random selection of characters from an alphabet.
pub mod password_generator;
/// Generate/reset lifecycle of an interactive session.
pub mod session;
/// Reading and writing of the settings file.
pub mod settings;

pub use alphabet::{build_alphabet, Alphabet};
pub use category::{Category, CategorySet};
pub use error::{Error, Result, ValidationError};
pub use length::{validate_length, PasswordLength, MAX_LENGTH, MIN_LENGTH};
pub use password_generator::{generate, generate_with_rng, GeneratedPassword};
pub use session::SessionState;
pub use settings::Settings;
