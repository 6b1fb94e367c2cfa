//! Property-based tests for the term transforms and the mangler.

use manifest::mangle::mangle;
use manifest::transform::{
    SubstitutionMode, alternating_case, case_variants, letter_substitutions,
    number_substitutions, reverse,
};
use proptest::prelude::*;

fn arb_term() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,12}").unwrap()
}

fn arb_unicode() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

fn expected_digit(d: char) -> Vec<String> {
    let subs: &[&str] = match d {
        '0' => &["O"],
        '1' => &["l"],
        '2' => &["Z"],
        '3' => &["E"],
        '4' => &["A"],
        '5' => &["S"],
        '6' => &["b", "G"],
        '7' => &["T", "L"],
        '8' => &["B"],
        _ => &["g", "q"],
    };
    subs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn every_single_digit_maps_to_its_substitutes() {
    for d in '0'..='9' {
        assert_eq!(number_substitutions(&d.to_string()), expected_digit(d), "digit {d}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn reverse_is_an_involution(s in arb_unicode()) {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn lowercase_variant_keeps_length(s in arb_term()) {
        let [lower, _] = case_variants(&s);
        prop_assert_eq!(lower.chars().count(), s.chars().count());
        prop_assert!(!lower.chars().any(char::is_uppercase));
    }

    #[test]
    fn alternating_case_keeps_letters(s in arb_term(), upper in any::<bool>()) {
        let alt = alternating_case(&s, upper);
        prop_assert_eq!(alt.to_lowercase(), s.to_lowercase());
    }

    #[test]
    fn substitutions_change_exactly_one_position(s in "[a-z]{1,10}") {
        for variant in letter_substitutions(&s) {
            let changed = variant.chars().zip(s.chars()).filter(|(a, b)| a != b).count();
            prop_assert_eq!(changed, 1);
            prop_assert_eq!(variant.chars().count(), s.chars().count());
        }
    }

    #[test]
    fn exhaustive_covers_single_position(s in "[a-z0-9]{1,6}") {
        let all = SubstitutionMode::Exhaustive.letters(&s);
        prop_assert_eq!(all.first(), Some(&s));
        for variant in SubstitutionMode::Single.letters(&s) {
            prop_assert!(all.contains(&variant));
        }
    }

    #[test]
    fn mangle_emits_case_forms_per_word(s in "[a-z]{1,8}") {
        let out = mangle(&[s.as_str()]);
        let [lower, capitalized] = case_variants(&s);
        prop_assert!(out.contains(&lower));
        prop_assert!(out.contains(&capitalized));
        prop_assert_eq!(out.len(), letter_substitutions(&s).len() + 4);
    }
}
