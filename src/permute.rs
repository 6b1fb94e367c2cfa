//! Permutations for structured, digit-heavy categories.
//!
//! Input is never validated. Slices are taken by character and clamp to the
//! term, so a short or non-numeric value still yields (degenerate) variants.

use crate::transform::{SubstitutionMode, reverse};

/// Characters `start..end` of `term`, clamped.
fn slice(term: &str, start: usize, end: Option<usize>) -> String {
    let take = end.map_or(usize::MAX, |end| end.saturating_sub(start));
    term.chars().skip(start).take(take).collect()
}

/// Area code of a 10-digit phone number.
pub fn area_code(phone: &str) -> String {
    slice(phone, 0, Some(3))
}

/// Full number, last 7, area code, last 4, reversed, reversed area code,
/// then digit substitutions of the full number.
pub fn permute_phone(phone: &str, mode: SubstitutionMode) -> Vec<String> {
    let area = area_code(phone);
    let mut out = vec![
        phone.to_owned(),
        slice(phone, 3, None),
        area.clone(),
        slice(phone, 6, None),
        reverse(phone),
        reverse(&area),
    ];
    out.extend(mode.numbers(phone));
    out
}

/// Last two digits, full year, reversed, then digit substitutions.
pub fn permute_year(year: &str, mode: SubstitutionMode) -> Vec<String> {
    let mut out = vec![slice(year, 2, None), year.to_owned(), reverse(year)];
    out.extend(mode.numbers(year));
    out
}

/// Reversed, digit substitutions, then the zip as given.
pub fn permute_zip(zip: &str, mode: SubstitutionMode) -> Vec<String> {
    let mut out = vec![reverse(zip)];
    out.extend(mode.numbers(zip));
    out.push(zip.to_owned());
    out
}

/// As given, reversed, then digit substitutions.
pub fn permute_street_number(number: &str, mode: SubstitutionMode) -> Vec<String> {
    let mut out = vec![number.to_owned(), reverse(number)];
    out.extend(mode.numbers(number));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: SubstitutionMode = SubstitutionMode::Single;

    #[test]
    fn zip_permutations() {
        assert_eq!(
            permute_zip("12345", SINGLE),
            ["54321", "l2345", "1Z345", "12E45", "123A5", "1234S", "12345"]
        );
    }

    #[test]
    fn year_permutations() {
        assert_eq!(
            permute_year("2016", SINGLE),
            ["16", "2016", "6102", "Z016", "2O16", "20l6", "201b", "201G"]
        );
        assert_eq!(
            permute_year("1984", SINGLE),
            ["84", "1984", "4891", "l984", "1g84", "1q84", "19B4", "198A"]
        );
    }

    #[test]
    fn phone_permutations_include_reversed_area_code() {
        let out = permute_phone("0123456789", SINGLE);
        assert_eq!(
            &out[..6],
            ["0123456789", "3456789", "012", "6789", "9876543210", "210"]
        );
        assert_eq!(out[6..], crate::transform::number_substitutions("0123456789")[..]);
    }

    #[test]
    fn street_number_permutations() {
        assert_eq!(permute_street_number("12", SINGLE), ["12", "21", "l2", "1Z"]);
        assert_eq!(
            permute_street_number("55667", SINGLE),
            ["55667", "76655", "S5667", "5S667", "55b67", "55G67", "556b7", "556G7", "5566T", "5566L"]
        );
        assert_eq!(permute_street_number("10A", SINGLE), ["10A", "A01", "l0A", "1OA"]);
    }

    #[test]
    fn malformed_input_degrades_without_panicking() {
        assert_eq!(permute_phone("12", SINGLE)[..6], ["12", "", "12", "", "21", "21"]);
        assert_eq!(permute_year("7", SINGLE), ["", "7", "7", "T", "L"]);
        assert_eq!(permute_zip("", SINGLE), ["", ""]);
        assert_eq!(area_code("ab"), "ab");
    }
}
