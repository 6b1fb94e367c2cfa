//! Casing and ordering transforms.

/// `[lowercase, Capitalized]`.
pub fn case_variants(term: &str) -> [String; 2] {
    [term.to_lowercase(), capitalize(term)]
}

/// First character uppercase, the rest lowercase.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Alternate upper/lower per character. A space keeps the parity of the
/// next letter.
pub fn alternating_case(term: &str, start_upper: bool) -> String {
    let mut upper = start_upper;
    let mut out = String::with_capacity(term.len());

    for c in term.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        if c != ' ' {
            upper = !upper;
        }
    }

    out
}

pub fn reverse(term: &str) -> String {
    term.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_variants_lower_then_capitalized() {
        assert_eq!(case_variants("a"), ["a", "A"]);
        assert_eq!(case_variants("abcdefg"), ["abcdefg", "Abcdefg"]);
        assert_eq!(case_variants("mIxEd"), ["mixed", "Mixed"]);
        assert_eq!(case_variants(""), ["", ""]);
    }

    #[test]
    fn alternating_case_ignores_input_case() {
        assert_eq!(alternating_case("abcdefg", true), "AbCdEfG");
        assert_eq!(alternating_case("ABCDEFG", true), "AbCdEfG");
        assert_eq!(alternating_case("abcdefg", false), "aBcDeFg");
        assert_eq!(alternating_case("ABCDEFG", false), "aBcDeFg");
    }

    #[test]
    fn space_does_not_advance_parity() {
        assert_eq!(alternating_case("foo fighters", true), "FoO fIgHtErS");
        assert_eq!(alternating_case("foo fighters", false), "fOo FiGhTeRs");
    }

    #[test]
    fn reverse_by_character() {
        assert_eq!(reverse("oftg"), "gtfo");
        assert_eq!(reverse("12345678"), "87654321");
        assert_eq!(reverse("añb"), "bña");
        assert_eq!(reverse(""), "");
    }
}
