//! Common suffix expansion.

use crate::combine::join;
use crate::permute::area_code;

const COMMON: [&str; 3] = ["!", "1", "123"];

/// Suffix tables derived from the structured categories.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    years: Vec<String>,
    zips: Vec<String>,
    street_numbers: Vec<String>,
    area_codes: Vec<String>,
}

impl SuffixSet {
    /// `phones` are raw numbers; only their first three digits are used.
    /// The other three are already-permuted variant lists.
    pub fn new(
        phones: &[String],
        street_numbers: Vec<String>,
        years: Vec<String>,
        zips: Vec<String>,
    ) -> Self {
        Self {
            years,
            zips,
            street_numbers,
            area_codes: phones.iter().map(|p| area_code(p)).collect(),
        }
    }

    /// Suffixes in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        COMMON
            .into_iter()
            .chain(self.years.iter().map(String::as_str))
            .chain(self.zips.iter().map(String::as_str))
            .chain(self.street_numbers.iter().map(String::as_str))
            .chain(self.area_codes.iter().map(String::as_str))
    }

    /// Number of suffixed words produced per input word.
    pub fn per_word(&self) -> usize {
        COMMON.len()
            + self.years.len()
            + self.zips.len()
            + self.street_numbers.len()
            + self.area_codes.len()
    }
}

/// Append every suffix to every word, lazily: `!`, `1`, `123`, each year
/// variant, each zip variant, each street-number variant, each area code.
pub fn add_suffixes<'a, I>(words: I, suffixes: &'a SuffixSet) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    words
        .into_iter()
        .flat_map(move |word| suffixes.iter().map(move |suffix| join(&word, suffix)))
}
