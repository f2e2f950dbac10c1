//! Short subject labels for slides.

use regex::Regex;
use std::sync::LazyLock;

use crate::Slide;

/// Filler phrases that open many slide titles without naming the subject.
static TITLE_FILLER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(introduction\s+(of|to)|concept\s+of|using)\s+").unwrap()
});

/// Label used when a slide offers nothing better.
pub const FALLBACK_TOPIC: &str = "the topic";

/// Derive the subject label of a slide.
///
/// Uses the title with leading filler removed; otherwise the first word of
/// the first content line; otherwise [`FALLBACK_TOPIC`]. Never empty.
pub fn topic(slide: &Slide) -> String {
    if let Some(title) = slide.title_text() {
        let stripped = TITLE_FILLER_REGEX.replace(title, "");
        let stripped = stripped.trim();
        if !stripped.is_empty() {
            return stripped.to_string();
        }
    }

    slide
        .non_empty_lines()
        .first()
        .and_then(|line| line.split_whitespace().next())
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_TOPIC.to_string())
}
