use crate::category::CategorySet;

/// The characters a password is sampled from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Concatenates the pools of every enabled category. The order is always
    /// uppercase, lowercase, numbers, symbols no matter in which order the
    /// flags were set.
    pub fn build(categories: &CategorySet) -> Alphabet {
        let chars = categories
            .enabled()
            .flat_map(|category| category.pool().chars())
            .collect();

        Alphabet { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

pub fn build_alphabet(categories: &CategorySet) -> Alphabet {
    Alphabet::build(categories)
}

#[cfg(test)]
#[path = "tests/alphabet.rs"]
mod alphabet_tests;
