/// One of the fixed groups of characters a password can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl Category {
    /// All categories, in the order their pools are concatenated into an alphabet.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Numbers,
        Category::Symbols,
    ];

    /// The characters this category contributes.
    pub fn pool(self) -> &'static str {
        match self {
            Category::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Category::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            Category::Numbers => "0123456789",
            Category::Symbols => "!@#$%^&+-/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Numbers => "numbers",
            Category::Symbols => "symbols",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which categories are currently enabled. Nothing forces at least one flag
/// to be set, an empty set simply produces an empty alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CategorySet {
    pub fn new() -> CategorySet {
        CategorySet::default()
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Numbers => self.numbers,
            Category::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        let flag = match category {
            Category::Uppercase => &mut self.uppercase,
            Category::Lowercase => &mut self.lowercase,
            Category::Numbers => &mut self.numbers,
            Category::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    /// Flips one flag, returns the new value.
    pub fn toggle(&mut self, category: Category) -> bool {
        let enabled = !self.is_enabled(category);
        self.set(category, enabled);
        enabled
    }

    /// The enabled categories, in alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_enabled(*category))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }

    pub fn clear(&mut self) {
        *self = CategorySet::default();
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::default();
        for category in iter {
            set.set(category, true);
        }
        set
    }
}

#[cfg(test)]
#[path = "tests/category.rs"]
mod category_tests;
