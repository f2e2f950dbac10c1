//! Detection and extraction of explicit acronym expansions.
//!
//! Two shapes are recognised:
//! - `HTTP stands for HyperText Transfer Protocol` (also "is short for",
//!   "full form is" and "the full form of X is", matched case-insensitively)
//! - `CPU (Central Processing Unit)`

use regex::Regex;
use std::sync::LazyLock;

/// An uppercase token directly followed by an expansion phrase.
static PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,})\s+(?i:stands\s+for|is\s+short\s+for|full\s+form\s+is)\b(.*)$")
        .unwrap()
});

/// `The full form of DBMS is ...`
static FULL_FORM_OF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:full\s+form\s+of)\s+([A-Z]{2,})\s+(?i:is)\b(.*)$").unwrap()
});

/// An uppercase token immediately followed by a parenthesized capitalized phrase.
static PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,})\s*\(\s*([A-Z][^()]*)\)").unwrap());

/// An acronym together with its expansion and the sentence stating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymFact {
    pub acronym: String,
    pub expansion: String,
    pub sentence: String,
}

/// True if any sentence states an acronym expansion in a recognised shape.
pub fn has_acronym_pattern<S: AsRef<str>>(sentences: &[S]) -> bool {
    sentences.iter().any(|s| {
        let s = s.as_ref();
        PHRASE_REGEX.is_match(s) || FULL_FORM_OF_REGEX.is_match(s) || PAREN_REGEX.is_match(s)
    })
}

/// Find the first usable acronym expansion among `sentences`.
pub fn extract_acronym<S: AsRef<str>>(sentences: &[S]) -> Option<AcronymFact> {
    sentences
        .iter()
        .find_map(|s| extract_from_sentence(s.as_ref()))
}

fn extract_from_sentence(sentence: &str) -> Option<AcronymFact> {
    let phrase = PHRASE_REGEX
        .captures(sentence)
        .or_else(|| FULL_FORM_OF_REGEX.captures(sentence));
    if let Some(caps) = phrase {
        let acronym = &caps[1];
        let expansion = clean_expansion(&caps[2]);
        if is_usable(acronym, &expansion) {
            return Some(AcronymFact {
                acronym: acronym.to_string(),
                expansion,
                sentence: sentence.to_string(),
            });
        }
    }

    for caps in PAREN_REGEX.captures_iter(sentence) {
        let acronym = &caps[1];
        let expansion = clean_expansion(&caps[2]);
        // "ID (User)" and similar single-word glosses are not expansions.
        if expansion.chars().count() > 3
            && expansion.split_whitespace().count() >= 2
            && is_usable(acronym, &expansion)
        {
            return Some(AcronymFact {
                acronym: acronym.to_string(),
                expansion,
                sentence: sentence.to_string(),
            });
        }
    }

    None
}

/// Trim an expansion to the phrase itself: stop at clause punctuation and
/// drop trailing sentence punctuation and quotes.
fn clean_expansion(raw: &str) -> String {
    let cut = raw
        .find(|c: char| matches!(c, ',' | ';' | ':' | '('))
        .map_or(raw, |idx| &raw[..idx]);

    cut.trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '“' | '”'))
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?'))
        .trim()
        .to_string()
}

fn is_usable(acronym: &str, expansion: &str) -> bool {
    !expansion.is_empty() && !expansion.eq_ignore_ascii_case(acronym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_stands_for() {
        assert!(has_acronym_pattern(&["HTTP stands for HyperText Transfer Protocol."]));
        assert!(has_acronym_pattern(&["The term RAM is short for Random Access Memory."]));
        assert!(has_acronym_pattern(&["The DBMS full form is Database Management System."]));
        assert!(has_acronym_pattern(&["HTTP STANDS FOR HyperText Transfer Protocol."]));
    }

    #[test]
    fn test_detects_parenthesized_expansion() {
        assert!(has_acronym_pattern(&["The CPU (Central Processing Unit) runs instructions."]));
    }

    #[test]
    fn test_ignores_plain_sentences() {
        assert!(!has_acronym_pattern(&[
            "Rust stands for safety and speed.",
            "Memory is managed through ownership.",
        ]));
        assert!(!has_acronym_pattern::<&str>(&[]));
    }

    #[test]
    fn test_extracts_phrase_expansion() {
        let fact = extract_acronym(&["HTTP stands for HyperText Transfer Protocol."]).unwrap();
        assert_eq!(fact.acronym, "HTTP");
        assert_eq!(fact.expansion, "HyperText Transfer Protocol");
    }

    #[test]
    fn test_binds_acronym_next_to_phrase() {
        let fact = extract_acronym(&["Unlike TCP, UDP stands for User Datagram Protocol."]).unwrap();
        assert_eq!(fact.acronym, "UDP");
        assert_eq!(fact.expansion, "User Datagram Protocol");

        let fact =
            extract_acronym(&["In SQL tooling the DBMS full form is Database Management System."])
                .unwrap();
        assert_eq!(fact.acronym, "DBMS");
    }

    #[test]
    fn test_extracts_full_form_of() {
        let fact =
            extract_acronym(&["The full form of DBMS is Database Management System."]).unwrap();
        assert_eq!(fact.acronym, "DBMS");
        assert_eq!(fact.expansion, "Database Management System");
    }

    #[test]
    fn test_expansion_stops_at_clause_punctuation() {
        let fact =
            extract_acronym(&["SQL stands for Structured Query Language, used by databases."])
                .unwrap();
        assert_eq!(fact.expansion, "Structured Query Language");
    }

    #[test]
    fn test_extracts_parenthesized_expansion() {
        let fact =
            extract_acronym(&["The CPU (Central Processing Unit) runs instructions."]).unwrap();
        assert_eq!(fact.acronym, "CPU");
        assert_eq!(fact.expansion, "Central Processing Unit");
    }

    #[test]
    fn test_rejects_degenerate_parenthesized_gloss() {
        assert!(extract_acronym(&["Every ID (User) maps to a single account."]).is_none());
        assert!(extract_acronym(&["Every ID (Usr) maps to a single account."]).is_none());
    }

    #[test]
    fn test_skips_empty_expansion() {
        assert!(extract_acronym(&["Nobody knows what XYZ stands for."]).is_none());
    }
}
