use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
    length::PasswordLength,
};

/// A freshly generated password. The characters are wiped from memory when
/// the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, which is the same as the requested length.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for GeneratedPassword {}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GeneratedPassword({} chars)", self.len())
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Generates a password of `length` characters, every character an
/// independent draw from `alphabet`.
pub fn generate(length: PasswordLength, alphabet: &Alphabet) -> Result<GeneratedPassword> {
    let mut rng = rand::thread_rng();
    generate_with_rng(length, alphabet, &mut rng)
}

/// Same as `generate` but draws from the supplied random number generator.
pub fn generate_with_rng<R: Rng + ?Sized>(
    length: PasswordLength,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    if alphabet.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let chars = alphabet.as_slice();
    let password: String = (0..length.get())
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    Ok(GeneratedPassword(password))
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_tests;
