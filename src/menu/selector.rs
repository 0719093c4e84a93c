//! Selector comparison rules
//!
//! Numbered selectors precede lettered ones regardless of registration
//! order. Matching is case-insensitive everywhere.

use std::cmp::Ordering;

/// Numeric value of a selector, if it is an integer
pub fn numeric(selector: &str) -> Option<i32> {
    selector.parse::<i32>().ok()
}

/// Display order: integers ascending, then everything else lexically.
///
/// Integers that compare equal (`"1"` and `"01"`) fall back to lexical order
/// so the ordering stays total.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Case-insensitive selector equality
pub fn matches(selector: &str, input: &str) -> bool {
    selector
        .chars()
        .flat_map(char::to_lowercase)
        .eq(input.chars().flat_map(char::to_lowercase))
}

/// Key used for the per-parent uniqueness check
pub fn fold(selector: &str) -> String {
    selector.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn numbers_sort_before_letters() {
        assert_eq!(sorted(&["10", "2", "B", "A"]), vec!["2", "10", "A", "B"]);
    }

    #[test]
    fn numbers_sort_numerically_not_lexically() {
        assert_eq!(sorted(&["9", "100", "11"]), vec!["9", "11", "100"]);
    }

    #[test]
    fn negative_numbers_are_numeric() {
        assert_eq!(sorted(&["1", "-1", "Q"]), vec!["-1", "1", "Q"]);
    }

    #[test]
    fn numbers_beyond_i32_sort_as_words() {
        assert_eq!(numeric("2147483647"), Some(i32::MAX));
        assert_eq!(numeric("2147483648"), None);
        assert_eq!(sorted(&["A", "2147483648", "5"]), vec!["5", "2147483648", "A"]);
    }

    #[test]
    fn equal_numbers_fall_back_to_lexical() {
        assert_eq!(compare("01", "1"), Ordering::Less);
        assert_eq!(compare("1", "1"), Ordering::Equal);
    }

    #[test]
    fn matches_ignores_case() {
        assert!(matches("Q", "q"));
        assert!(matches("ab", "AB"));
        assert!(!matches("a", "ab"));
    }

    #[test]
    fn fold_is_case_insensitive() {
        assert_eq!(fold("Menu"), fold("mENU"));
    }
}
