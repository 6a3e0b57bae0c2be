//! Keyword-matching query responder.
//!
//! A deliberately trivial intent classifier: a fixed, ordered table of
//! (intent, keywords) pairs matched case-insensitively as substrings. The
//! first matching intent wins, so a query mentioning both a location and a
//! speed keyword is answered as a location query.

/// Intent table in priority order. Matching is case-insensitive substring.
const INTENTS: &[(&str, &[&str])] = &[
    ("location", &["location", "where"]),
    ("eta", &["eta", "time", "arrive"]),
    ("speed", &["speed", "how fast"]),
];

/// Fallback response when no intent matches.
const FALLBACK: &str =
    "I can help with location, ETA, and speed information. What would you like to know?";

/// Classifies a free-text query into a canned tracking response.
///
/// Pure function: no state, no side effects.
#[must_use]
pub fn classify(query: &str) -> String {
    let normalized = query.to_lowercase();
    for (intent, keywords) in INTENTS {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return format!("The bus {intent} is currently being tracked.");
        }
    }
    FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_query() {
        assert_eq!(
            classify("Where is the bus?"),
            "The bus location is currently being tracked."
        );
    }

    #[test]
    fn eta_query() {
        assert_eq!(
            classify("what's the ETA"),
            "The bus eta is currently being tracked."
        );
    }

    #[test]
    fn speed_query() {
        assert_eq!(
            classify("how fast is it going"),
            "The bus speed is currently being tracked."
        );
    }

    #[test]
    fn unknown_query_gets_fallback() {
        assert_eq!(classify("hello"), FALLBACK);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("WHERE IS IT"),
            "The bus location is currently being tracked."
        );
    }

    #[test]
    fn location_wins_over_later_intents() {
        // "where" and "speed" both match; location is checked first.
        assert_eq!(
            classify("where is it and what speed"),
            "The bus location is currently being tracked."
        );
    }

    #[test]
    fn arrive_maps_to_eta() {
        assert_eq!(
            classify("when does it arrive"),
            "The bus eta is currently being tracked."
        );
    }

    #[test]
    fn empty_query_gets_fallback() {
        assert_eq!(classify(""), FALLBACK);
    }
}
