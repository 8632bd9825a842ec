//! Search-widget autocomplete
//!
//! Case-insensitive filtering for the electorate search box: names starting
//! with the input rank above names merely containing it, capped at ten
//! suggestions.

/// Maximum number of suggestions returned
const MAX_SUGGESTIONS: usize = 10;

/// One autocomplete suggestion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
}

/// Rank candidate strings against the typed input
///
/// Prefix matches come first (in input order), then substring matches;
/// empty input yields nothing.
pub fn autocomplete<S: AsRef<str>>(input: &str, candidates: &[S]) -> Vec<Suggestion> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();

    let mut prefix = Vec::new();
    let mut substring = Vec::new();
    for candidate in candidates {
        let lower = candidate.as_ref().to_lowercase();
        if lower.starts_with(&needle) {
            prefix.push(candidate.as_ref());
        } else if lower.contains(&needle) {
            substring.push(candidate.as_ref());
        }
    }

    prefix
        .into_iter()
        .chain(substring)
        .take(MAX_SUGGESTIONS)
        .map(|text| Suggestion {
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEATS: &[&str] = &[
        "Wentworth",
        "Warringah",
        "North Sydney",
        "Kooyong",
        "Goldstein",
        "Curtin",
        "Mackellar",
        "Wannon",
    ];

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn prefix_matches_rank_first() {
        let results = autocomplete("wa", SEATS);
        assert_eq!(texts(&results), vec!["Warringah", "Wannon"]);
    }

    #[test]
    fn substring_matches_follow_prefixes() {
        let results = autocomplete("n", SEATS);
        // "North Sydney" starts with n; the rest merely contain it
        assert_eq!(texts(&results)[0], "North Sydney");
        assert!(texts(&results).contains(&"Wentworth"));
    }

    #[test]
    fn case_insensitive() {
        let results = autocomplete("KOOY", SEATS);
        assert_eq!(texts(&results), vec!["Kooyong"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(autocomplete("", SEATS).is_empty());
    }

    #[test]
    fn capped_at_ten() {
        let many: Vec<String> = (0..25).map(|i| format!("Seat {i}")).collect();
        assert_eq!(autocomplete("seat", &many).len(), 10);
    }
}
