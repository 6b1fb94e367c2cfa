//! End-to-end candidate generation.
//!
//! [`Profile`] sorts a [`BookKeeper`] into the engine's inputs: mangled
//! free-text categories, the raw "other" category, phone permutations and
//! the suffix tables. [`generate`] then runs
//! combine → suffix → dedupe → rank and hands back the ordered sequence.

use tracing::{debug, info, warn};

use crate::book::BookKeeper;
use crate::combine::{combine, combine_with_self};
use crate::mangle::mangle_with;
use crate::permute::{permute_phone, permute_street_number, permute_year, permute_zip};
use crate::rank::{LengthBounds, Pairing, Ranking, dedupe};
use crate::suffix::{SuffixSet, add_suffixes};
use crate::transform::SubstitutionMode;

/// Free-text categories, in combination order.
pub const FREE_TEXT: [&str; 11] = [
    "cities", "colors", "family", "jobs", "music", "other", "pets", "schools", "sports", "states",
    "streets",
];

pub const PHONE: &str = "phone";
pub const YEARS: &str = "years";
pub const ZIP_CODES: &str = "zip_codes";
pub const STREET_NUMBERS: &str = "street_numbers";
pub const OTHER: &str = "other";

/// Alternate spellings accepted for a free-text category.
const ALIASES: [(&str, &str); 1] = [("employment", "jobs")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub bounds: LengthBounds,
    pub substitution: SubstitutionMode,
    pub pairing: Pairing,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bounds: LengthBounds::new(6, 12),
            substitution: SubstitutionMode::default(),
            pairing: Pairing::default(),
        }
    }
}

fn is_reserved(name: &str) -> bool {
    FREE_TEXT.contains(&name)
        || ALIASES.iter().any(|(alias, _)| *alias == name)
        || [PHONE, YEARS, ZIP_CODES, STREET_NUMBERS].contains(&name)
}

/// Terms of `name` plus those filed under any of its aliases.
fn terms_of<'a>(book: &'a BookKeeper, name: &str) -> Vec<&'a str> {
    let aliases = ALIASES
        .iter()
        .filter(|(_, canonical)| *canonical == name)
        .map(|(alias, _)| *alias);

    std::iter::once(name)
        .chain(aliases)
        .filter_map(|n| book.words(n))
        .flatten()
        .map(String::as_str)
        .filter(|t| !t.trim().is_empty())
        .collect()
}

fn is_malformed(term: &str, digits: usize) -> bool {
    term.chars().count() != digits || !term.chars().all(|c| c.is_ascii_digit())
}

/// Malformed structured terms are still permuted as given.
fn warn_malformed(category: &str, terms: &[&str], digits: usize) {
    for term in terms.iter().filter(|t| is_malformed(t, digits)) {
        warn!(category, term, "expected {digits} digits");
    }
}

fn permute_all(
    terms: &[&str],
    permute: fn(&str, SubstitutionMode) -> Vec<String>,
    mode: SubstitutionMode,
) -> Vec<String> {
    terms.iter().flat_map(|t| permute(t, mode)).collect()
}

/// Inputs of the combination stages, derived once per run.
#[derive(Debug, Clone)]
pub struct Profile {
    collections: Vec<Vec<String>>,
    other: Vec<String>,
    phone_variants: Vec<String>,
    suffixes: SuffixSet,
}

impl Profile {
    /// Free-text categories are the fixed list followed by any unknown
    /// category names in sorted order. Missing categories count as empty.
    pub fn new(book: &BookKeeper, mode: SubstitutionMode) -> Self {
        let mut extra: Vec<&str> = book.category_names().filter(|n| !is_reserved(n)).collect();
        extra.sort_unstable();

        let collections: Vec<Vec<String>> = FREE_TEXT
            .iter()
            .copied()
            .chain(extra)
            .map(|name| mangle_with(&terms_of(book, name), mode))
            .collect();

        let phones = terms_of(book, PHONE);
        warn_malformed(PHONE, &phones, 10);
        let years = terms_of(book, YEARS);
        warn_malformed(YEARS, &years, 4);
        let zips = terms_of(book, ZIP_CODES);
        warn_malformed(ZIP_CODES, &zips, 5);

        let phone_variants = permute_all(&phones, permute_phone, mode);
        let suffixes = SuffixSet::new(
            &phones.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            permute_all(&terms_of(book, STREET_NUMBERS), permute_street_number, mode),
            permute_all(&years, permute_year, mode),
            permute_all(&zips, permute_zip, mode),
        );

        let other = terms_of(book, OTHER).into_iter().map(str::to_owned).collect();

        let profile = Self {
            collections,
            other,
            phone_variants,
            suffixes,
        };
        debug!(
            categories = profile.collections.len(),
            mangled = profile.collections.iter().map(Vec::len).sum::<usize>(),
            phone_variants = profile.phone_variants.len(),
            suffixes = profile.suffixes.per_word(),
            "profile built"
        );
        profile
    }

    /// Cross-category compounds, the final category's own terms, then the
    /// "other" self-combination.
    pub fn combinations(&self) -> impl Iterator<Item = String> + '_ {
        // the final category is never an outer side of `combine`
        let last = self.collections.last().into_iter().flatten().cloned();
        combine(&self.collections)
            .chain(last)
            .chain(combine_with_self(&self.other))
    }

    /// Every raw candidate: phone permutations, compounds, then suffixed
    /// compounds. Lazy and not deduplicated.
    pub fn candidates(&self) -> impl Iterator<Item = String> + '_ {
        self.phone_variants
            .iter()
            .cloned()
            .chain(self.combinations())
            .chain(add_suffixes(self.combinations(), &self.suffixes))
    }

    /// Deduplicate, filter and bucket.
    pub fn rank(&self, bounds: LengthBounds) -> Ranking {
        let unique = dedupe(self.candidates(), bounds);
        let ranking = Ranking::new(unique);
        info!(
            candidates = ranking.len(),
            min = bounds.min,
            max = bounds.max,
            "candidates ranked"
        );
        ranking
    }
}

/// Ranked, deduplicated candidates for `book`, most plausible first.
pub fn generate(book: &BookKeeper, options: &Options) -> impl Iterator<Item = String> + use<> {
    Profile::new(book, options.substitution)
        .rank(options.bounds)
        .into_sequence(options.pairing)
}
