//! Category store: an ordered mapping from category name to terms.

mod file;

use std::collections::BTreeMap;

use zeroize::Zeroize;

pub use file::{load, parse, save};

/// Lowercase, trimmed, spaces replaced by underscores.
pub fn normalize(name: &str) -> String {
    name.trim().replace(' ', "_").to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    terms: Vec<String>,
}

/// Terms grouped by category, in insertion order. Terms are unique within
/// a category. All category arguments are normalized before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookKeeper {
    categories: Vec<Category>,
}

impl BookKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, name: &str) -> Option<&Category> {
        let name = normalize(name);
        self.categories.iter().find(|c| c.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        let name = normalize(name);
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Returns false if the category already exists.
    pub fn add_category(&mut self, name: &str) -> bool {
        if self.find(name).is_some() {
            return false;
        }
        self.categories.push(Category {
            name: normalize(name),
            terms: Vec::new(),
        });
        true
    }

    /// Creates the category on first use. Returns false if the term is
    /// already present.
    pub fn add_word(&mut self, category: &str, term: &str) -> bool {
        match self.find_mut(category) {
            Some(c) if c.terms.iter().any(|t| t == term) => false,
            Some(c) => {
                c.terms.push(term.to_owned());
                true
            }
            None => {
                self.categories.push(Category {
                    name: normalize(category),
                    terms: vec![term.to_owned()],
                });
                true
            }
        }
    }

    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.find(category).map(|c| c.terms.as_slice())
    }

    /// Every term of every category, category order first.
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.terms.iter().map(String::as_str))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.find(category).is_some()
    }

    /// Empty the category, keeping it. Returns false if it does not exist.
    pub fn clear_category(&mut self, category: &str) -> bool {
        match self.find_mut(category) {
            Some(c) => {
                c.terms.zeroize();
                true
            }
            None => false,
        }
    }

    /// Returns false if either the category or the term is missing.
    pub fn remove_word(&mut self, category: &str, term: &str) -> bool {
        let Some(c) = self.find_mut(category) else {
            return false;
        };
        match c.terms.iter().position(|t| t == term) {
            Some(i) => {
                c.terms.remove(i).zeroize();
                true
            }
            None => false,
        }
    }

    /// Empty every category. Returns false if there are none.
    pub fn clear_all(&mut self) -> bool {
        if self.categories.is_empty() {
            return false;
        }
        for c in &mut self.categories {
            c.terms.zeroize();
        }
        true
    }

    /// Drop all categories and their terms.
    pub fn reset(&mut self) {
        self.clear_all();
        self.categories.clear();
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Plain name → terms mapping, sorted by name.
    pub fn export(&self) -> BTreeMap<String, Vec<String>> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.terms.clone()))
            .collect()
    }
}

impl Drop for BookKeeper {
    fn drop(&mut self) {
        self.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_once() {
        let mut book = BookKeeper::new();
        assert!(book.add_category("Pets"));
        assert!(!book.add_category("pets"));
        assert_eq!(book.category_names().collect::<Vec<_>>(), ["pets"]);
    }

    #[test]
    fn names_are_normalized() {
        let mut book = BookKeeper::new();
        book.add_word(" Zip Codes ", "90210");
        assert_eq!(book.words("zip_codes"), Some(&["90210".to_string()][..]));
        assert!(book.contains("ZIP codes"));
    }

    #[test]
    fn add_word_rejects_duplicates() {
        let mut book = BookKeeper::new();
        assert!(book.add_word("pets", "fido"));
        assert!(!book.add_word("pets", "fido"));
        assert!(book.add_word("pets", "rex"));
        assert_eq!(book.words("pets").map(<[String]>::len), Some(2));
    }

    #[test]
    fn remove_and_clear() {
        let mut book = BookKeeper::new();
        book.add_word("pets", "fido");
        book.add_word("pets", "rex");
        book.add_word("family", "ann");

        assert!(book.remove_word("pets", "fido"));
        assert!(!book.remove_word("pets", "fido"));
        assert!(!book.remove_word("cars", "fido"));
        assert_eq!(book.all_words().collect::<Vec<_>>(), ["rex", "ann"]);

        assert!(book.clear_category("family"));
        assert!(!book.clear_category("cars"));
        assert_eq!(book.words("family"), Some(&[][..]));

        assert!(book.clear_all());
        assert_eq!(book.all_words().count(), 0);
        assert_eq!(book.len(), 2);

        book.reset();
        assert!(book.is_empty());
        assert!(!book.clear_all());
    }

    #[test]
    fn export_is_sorted_by_name() {
        let mut book = BookKeeper::new();
        book.add_word("years", "1999");
        book.add_word("pets", "fido");
        let exported = book.export();
        assert_eq!(exported.keys().collect::<Vec<_>>(), ["pets", "years"]);
        assert_eq!(exported["years"], ["1999"]);
    }
}
