use crate::{
    alphabet::Alphabet,
    category::{Category, CategorySet},
    error::Result,
    length::{validate_length, PasswordLength},
    password_generator::{generate, GeneratedPassword},
};

/// The state of one interactive session: the selected categories and the
/// last generated password, if any. Nothing here is ever persisted.
#[derive(Debug, Default)]
pub struct SessionState {
    password: Option<GeneratedPassword>,
    categories: CategorySet,
}

impl SessionState {
    /// A session with no result and every category disabled.
    pub fn new() -> SessionState {
        SessionState::default()
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.password.is_some()
    }

    /// True when at least one category is selected, callers should only
    /// offer generation while this holds.
    pub fn can_generate(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Flips one category. A password that was already generated stays
    /// until the next generate or reset.
    pub fn toggle(&mut self, category: Category) -> bool {
        let enabled = self.categories.toggle(category);
        log::debug!("category {} is now {}", category, enabled);
        enabled
    }

    pub fn set_category(&mut self, category: Category, enabled: bool) {
        self.categories.set(category, enabled);
    }

    /// Validates `raw_length` and generates a new password from the selected
    /// categories. On failure the session is left exactly as it was.
    pub fn generate(&mut self, raw_length: &str) -> Result<&GeneratedPassword> {
        let length = validate_length(raw_length)?;
        self.generate_length(length)
    }

    pub fn generate_length(&mut self, length: PasswordLength) -> Result<&GeneratedPassword> {
        let alphabet = Alphabet::build(&self.categories);
        let password = generate(length, &alphabet)?;
        log::debug!(
            "generated a password of length {} from an alphabet of {} characters",
            length,
            alphabet.len()
        );

        Ok(&*self.password.insert(password))
    }

    /// Clears the result and disables every category.
    pub fn reset(&mut self) {
        self.password = None;
        self.categories.clear();
        log::debug!("session reset");
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod session_tests;
