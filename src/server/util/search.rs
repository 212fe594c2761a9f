/// Substring match ignoring case across the full Unicode range.
///
/// The query is matched literally, so `%` and `_` carry no special meaning.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accented_capitals() {
        assert!(contains_ignore_case("Élodie Benani", "élodie"));
        assert!(contains_ignore_case("société générale", "GÉNÉRALE"));
        assert!(!contains_ignore_case("Elodie", "élodie"));
    }

    #[test]
    fn treats_wildcards_literally() {
        assert!(!contains_ignore_case("Berrada", "B%a"));
        assert!(!contains_ignore_case("AB12", "A_12"));
        assert!(contains_ignore_case("50% off", "50%"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(contains_ignore_case("anything", ""));
    }
}
