//! Leet-style character substitution.

/// Letter look-alikes for digits.
fn digit_alternatives(c: char) -> &'static [char] {
    match c {
        '0' => &['O'],
        '1' => &['l'],
        '2' => &['Z'],
        '3' => &['E'],
        '4' => &['A'],
        '5' => &['S'],
        '6' => &['b', 'G'],
        '7' => &['T', 'L'],
        '8' => &['B'],
        '9' => &['g', 'q'],
        _ => &[],
    }
}

/// Digit and symbol look-alikes for lowercase letters.
fn letter_alternatives(c: char) -> &'static [char] {
    match c {
        'a' => &['@', '4'],
        'b' => &['8'],
        'c' => &['('],
        'e' => &['3'],
        'g' => &['6', '9'],
        'h' => &['#'],
        'i' => &['!'],
        'l' => &['1'],
        'o' => &['0'],
        's' => &['5', '$'],
        't' => &['+', '7'],
        'z' => &['2'],
        _ => &[],
    }
}

/// How many positions of a term one variant may substitute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// One variant per (position, substitute) pair.
    #[default]
    Single,
    /// Every combination of kept and substituted positions, the unchanged
    /// term first. Grows as the product of per-position choices.
    Exhaustive,
}

impl SubstitutionMode {
    pub fn numbers(self, term: &str) -> Vec<String> {
        match self {
            SubstitutionMode::Single => single_position(term, digit_alternatives),
            SubstitutionMode::Exhaustive => every_combination(term, digit_alternatives),
        }
    }

    /// Lowercases before substituting.
    pub fn letters(self, term: &str) -> Vec<String> {
        let lower = term.to_lowercase();
        match self {
            SubstitutionMode::Single => single_position(&lower, letter_alternatives),
            SubstitutionMode::Exhaustive => every_combination(&lower, letter_alternatives),
        }
    }
}

/// Replace each mapped digit with each of its letter look-alikes, one
/// position at a time.
pub fn number_substitutions(term: &str) -> Vec<String> {
    SubstitutionMode::Single.numbers(term)
}

/// Lowercase `term`, then replace each mapped letter with each of its
/// look-alikes, one position at a time.
pub fn letter_substitutions(term: &str) -> Vec<String> {
    SubstitutionMode::Single.letters(term)
}

fn single_position(term: &str, table: fn(char) -> &'static [char]) -> Vec<String> {
    let chars: Vec<char> = term.chars().collect();
    let mut variants = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        for &alt in table(c) {
            let mut variant = chars.clone();
            variant[i] = alt;
            variants.push(variant.into_iter().collect());
        }
    }

    variants
}

fn every_combination(term: &str, table: fn(char) -> &'static [char]) -> Vec<String> {
    if term.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![String::with_capacity(term.len())];
    for c in term.chars() {
        let alts = table(c);
        let mut next = Vec::with_capacity(variants.len() * (alts.len() + 1));
        for prefix in &variants {
            for choice in std::iter::once(c).chain(alts.iter().copied()) {
                let mut grown = prefix.clone();
                grown.push(choice);
                next.push(grown);
            }
        }
        variants = next;
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_digit_maps_to_its_alternatives() {
        assert_eq!(number_substitutions("0"), ["O"]);
        assert_eq!(number_substitutions("1"), ["l"]);
        assert_eq!(number_substitutions("2"), ["Z"]);
        assert_eq!(number_substitutions("3"), ["E"]);
        assert_eq!(number_substitutions("4"), ["A"]);
        assert_eq!(number_substitutions("5"), ["S"]);
        assert_eq!(number_substitutions("6"), ["b", "G"]);
        assert_eq!(number_substitutions("7"), ["T", "L"]);
        assert_eq!(number_substitutions("8"), ["B"]);
        assert_eq!(number_substitutions("9"), ["g", "q"]);
    }

    #[test]
    fn number_substitution_touches_one_position() {
        assert_eq!(
            number_substitutions("0123456789"),
            [
                "O123456789",
                "0l23456789",
                "01Z3456789",
                "012E456789",
                "0123A56789",
                "01234S6789",
                "012345b789",
                "012345G789",
                "0123456T89",
                "0123456L89",
                "01234567B9",
                "012345678g",
                "012345678q",
            ]
        );
    }

    #[test]
    fn letters_without_alternatives_yield_nothing() {
        for c in "dfjkmnpqruvwxy".chars() {
            assert!(letter_substitutions(&c.to_string()).is_empty(), "{c}");
        }
    }

    #[test]
    fn letter_substitution_lowercases_first() {
        assert_eq!(
            letter_substitutions("ABCDEFG"),
            ["@bcdefg", "4bcdefg", "a8cdefg", "ab(defg", "abcd3fg", "abcdef6", "abcdef9"]
        );
        assert_eq!(
            letter_substitutions("hijklmnop"),
            ["#ijklmnop", "h!jklmnop", "hijk1mnop", "hijklmn0p"]
        );
        assert_eq!(
            letter_substitutions("qrstuvwxyz"),
            ["qr5tuvwxyz", "qr$tuvwxyz", "qrs+uvwxyz", "qrs7uvwxyz", "qrstuvwxy2"]
        );
    }

    #[test]
    fn empty_and_unmapped_input() {
        assert!(number_substitutions("").is_empty());
        assert!(letter_substitutions("").is_empty());
        assert!(number_substitutions("abc").is_empty());
        assert_eq!(letter_substitutions("ñoño"), ["ñ0ño", "ñoñ0"]);
    }

    #[test]
    fn exhaustive_covers_every_combination() {
        assert_eq!(
            SubstitutionMode::Exhaustive.numbers("16"),
            ["16", "1b", "1G", "l6", "lb", "lG"]
        );
        assert_eq!(SubstitutionMode::Exhaustive.letters("Ox"), ["ox", "0x"]);
        assert!(SubstitutionMode::Exhaustive.numbers("").is_empty());
    }
}
