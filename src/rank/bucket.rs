//! Character-class buckets.

/// Composition class of a candidate. Every string lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Numeric,
    AlphaLower,
    AlphaMixed,
    AlnumLower,
    AlnumMixed,
    Special,
}

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::Numeric,
        Bucket::AlphaLower,
        Bucket::AlphaMixed,
        Bucket::AlnumLower,
        Bucket::AlnumMixed,
        Bucket::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Bucket::Numeric => "numeric",
            Bucket::AlphaLower => "alpha_lower",
            Bucket::AlphaMixed => "alpha_mixed",
            Bucket::AlnumLower => "alnum_lower",
            Bucket::AlnumMixed => "alnum_mixed",
            Bucket::Special => "special",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// At least one cased character and no uppercase ones.
fn is_lower(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        cased |= c.is_lowercase();
    }
    cased
}

/// Uppercase first character followed by a lowercase remainder.
fn is_title(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && is_lower(chars.as_str()),
        None => false,
    }
}

/// First matching rule wins: numeric, alpha (lower or title case), alpha
/// mixed, alnum lower, alnum mixed, special. The empty string has no
/// characters to satisfy any class and is special.
pub fn classify(word: &str) -> Bucket {
    if word.is_empty() {
        return Bucket::Special;
    }

    if word.chars().all(char::is_numeric) {
        Bucket::Numeric
    } else if word.chars().all(char::is_alphabetic) {
        if is_lower(word) || is_title(word) {
            Bucket::AlphaLower
        } else {
            Bucket::AlphaMixed
        }
    } else if word.chars().all(char::is_alphanumeric) {
        if is_lower(word) {
            Bucket::AlnumLower
        } else {
            Bucket::AlnumMixed
        }
    } else {
        Bucket::Special
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_composition() {
        assert_eq!(classify("12345"), Bucket::Numeric);
        assert_eq!(classify("abc"), Bucket::AlphaLower);
        assert_eq!(classify("Abc"), Bucket::AlphaLower);
        assert_eq!(classify("ABc"), Bucket::AlphaMixed);
        assert_eq!(classify("aBC"), Bucket::AlphaMixed);
        assert_eq!(classify("abc123"), Bucket::AlnumLower);
        assert_eq!(classify("Abc123"), Bucket::AlnumMixed);
        assert_eq!(classify("abc!"), Bucket::Special);
        assert_eq!(classify("two words"), Bucket::Special);
    }

    #[test]
    fn empty_string_is_special() {
        assert_eq!(classify(""), Bucket::Special);
    }

    #[test]
    fn single_characters() {
        assert_eq!(classify("7"), Bucket::Numeric);
        assert_eq!(classify("a"), Bucket::AlphaLower);
        // A lone capital has no lowercase remainder to make it title case.
        assert_eq!(classify("A"), Bucket::AlphaMixed);
        assert_eq!(classify("!"), Bucket::Special);
    }

    #[test]
    fn alnum_case_follows_letters() {
        assert_eq!(classify("Z016"), Bucket::AlnumMixed);
        assert_eq!(classify("l2345"), Bucket::AlnumLower);
    }
}
