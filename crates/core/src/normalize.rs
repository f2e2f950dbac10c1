//! Sentence normalization for raw slide lines.
//!
//! Turns extracted content lines into clean sentences: Unicode
//! compatibility folding, whitespace collapsing, bullet stripping and
//! terminal punctuation, then drops anything too short or markup-laden
//! to build a question from.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::GeneratorConfig;

/// Regex to collapse whitespace runs into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Leading runs of bullet glyphs, dashes and asterisks (with interleaved spaces).
static LEADING_BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s•·∙◦▪▫‣●○■□➢➤►▶✓✔–—*\-]+").unwrap()
});

/// Characters that mark a line as markup residue rather than prose.
const MARKUP_CHARS: &[char] = &['<', '>', '{', '}', '[', ']'];

/// Punctuation accepted as the end of a sentence.
const TERMINAL_PUNCTUATION: &[char] = &['.', '?', '!'];

/// Cleans and filters raw content lines into usable sentences.
#[derive(Debug, Clone)]
pub struct SentenceNormalizer {
    min_chars: usize,
    min_tokens: usize,
}

impl Default for SentenceNormalizer {
    fn default() -> Self {
        Self {
            min_chars: 15,
            min_tokens: 4,
        }
    }
}

impl SentenceNormalizer {
    /// Create a normalizer with the default thresholds (15 chars, 4 tokens).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer using the thresholds of a generator config.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            min_chars: config.min_sentence_chars,
            min_tokens: config.min_sentence_tokens,
        }
    }

    /// Set the minimum sentence length in characters.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Set the minimum sentence length in tokens.
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    /// Clean a single line, returning `None` if it is not a usable sentence.
    pub fn normalize_line(&self, line: &str) -> Option<String> {
        let folded: String = line.nfkc().collect();

        if folded.contains(MARKUP_CHARS) {
            return None;
        }

        let collapsed = WHITESPACE_COLLAPSE_REGEX.replace_all(&folded, " ");
        let stripped = LEADING_BULLET_REGEX.replace(collapsed.trim(), "");
        let mut sentence = stripped.trim().to_string();

        if sentence.is_empty() {
            return None;
        }

        if !sentence.ends_with(TERMINAL_PUNCTUATION) {
            sentence.push('.');
        }

        if sentence.chars().count() < self.min_chars
            || sentence.split_whitespace().count() < self.min_tokens
        {
            return None;
        }

        Some(sentence)
    }

    /// Normalize a list of raw lines, preserving their order.
    pub fn normalize<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| self.normalize_line(line.as_ref()))
            .collect()
    }
}

/// Cut `text` to at most `max_tokens` whitespace-delimited tokens.
pub fn truncate_tokens(text: &str, max_tokens: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= max_tokens {
        return tokens.join(" ");
    }
    tokens[..max_tokens].join(" ")
}
