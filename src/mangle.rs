//! Free-text category mangling.

use crate::transform::{SubstitutionMode, alternating_case, case_variants};

/// Break comma- or whitespace-separated input into one term per word.
pub fn split_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .flat_map(|batch| batch.as_ref().split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Mangle every term with single-position substitutions.
pub fn mangle<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    mangle_with(terms, SubstitutionMode::Single)
}

/// Per term, in order: letter substitutions, lowercase, capitalized, then
/// alternating case starting upper and starting lower.
///
/// Not deduplicated.
pub fn mangle_with<S: AsRef<str>>(terms: &[S], mode: SubstitutionMode) -> Vec<String> {
    let mut mangled = Vec::new();

    for term in split_terms(terms) {
        mangled.extend(mode.letters(&term));
        mangled.extend(case_variants(&term));
        mangled.push(alternating_case(&term, true));
        mangled.push(alternating_case(&term, false));
    }

    mangled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangles_in_term_then_transform_order() {
        assert_eq!(
            mangle(&["spike", "tiger"]),
            [
                "5pike", "$pike", "sp!ke", "spik3", "spike", "Spike", "SpIkE", "sPiKe", "+iger",
                "7iger", "t!ger", "ti6er", "ti9er", "tig3r", "tiger", "Tiger", "TiGeR", "tIgEr",
            ]
        );
        assert_eq!(
            mangle(&["poker", "lakers"]),
            [
                "p0ker", "pok3r", "poker", "Poker", "PoKeR", "pOkEr", "1akers", "l@kers",
                "l4kers", "lak3rs", "laker5", "laker$", "lakers", "Lakers", "LaKeRs", "lAkErS",
            ]
        );
    }

    #[test]
    fn splits_multi_word_batches() {
        assert_eq!(
            split_terms(&["red sox,  yankees", "mets"]),
            ["red", "sox", "yankees", "mets"]
        );
        assert_eq!(mangle(&["dog cat"]), mangle(&["dog", "cat"]));
    }

    #[test]
    fn empty_category_mangles_to_nothing() {
        let empty: [&str; 0] = [];
        assert!(mangle(&empty).is_empty());
        assert!(mangle(&["", " , "]).is_empty());
    }

    #[test]
    fn exhaustive_mode_includes_plain_term() {
        let out = mangle_with(&["ab"], SubstitutionMode::Exhaustive);
        assert_eq!(&out[..6], ["ab", "a8", "@b", "@8", "4b", "48"]);
    }
}
