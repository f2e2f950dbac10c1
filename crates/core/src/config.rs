//! Tunable thresholds for the question generator.

use serde::{Deserialize, Serialize};

use crate::{Difficulty, Error, Result};

/// Configuration shared by the normalizer, strategies and orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum character length of a usable sentence.
    pub min_sentence_chars: usize,

    /// Minimum whitespace-delimited token count of a usable sentence.
    pub min_sentence_tokens: usize,

    /// Options drawn from source text are cut to this many tokens.
    pub max_option_tokens: usize,

    /// Total attempts allowed per call = requested count * multiplier.
    pub attempt_multiplier: usize,

    /// Draws from the deceptive full-form generator per acronym question.
    pub acronym_attempts: usize,

    /// Decks with fewer usable sentences yield nothing unless they carry
    /// an acronym expansion.
    pub min_deck_sentences: usize,

    /// Label stamped on every generated question.
    pub difficulty: Difficulty,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 15,
            min_sentence_tokens: 4,
            max_option_tokens: 12,
            attempt_multiplier: 3,
            acronym_attempts: 50,
            min_deck_sentences: 4,
            difficulty: Difficulty::Normal,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    pub fn with_min_sentence_tokens(mut self, tokens: usize) -> Self {
        self.min_sentence_tokens = tokens;
        self
    }

    pub fn with_max_option_tokens(mut self, tokens: usize) -> Self {
        self.max_option_tokens = tokens;
        self
    }

    pub fn with_attempt_multiplier(mut self, multiplier: usize) -> Self {
        self.attempt_multiplier = multiplier;
        self
    }

    pub fn with_acronym_attempts(mut self, attempts: usize) -> Self {
        self.acronym_attempts = attempts;
        self
    }

    pub fn with_min_deck_sentences(mut self, sentences: usize) -> Self {
        self.min_deck_sentences = sentences;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Reject settings that would make generation degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.max_option_tokens == 0 {
            return Err(Error::InvalidConfig(
                "max_option_tokens must be at least 1".to_string(),
            ));
        }
        if self.attempt_multiplier == 0 {
            return Err(Error::InvalidConfig(
                "attempt_multiplier must be at least 1".to_string(),
            ));
        }
        if self.acronym_attempts == 0 {
            return Err(Error::InvalidConfig(
                "acronym_attempts must be at least 1".to_string(),
            ));
        }
        if self.min_sentence_tokens == 0 {
            return Err(Error::InvalidConfig(
                "min_sentence_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Attempt budget for a request of `requested` questions.
    pub fn attempt_limit(&self, requested: usize) -> usize {
        requested.saturating_mul(self.attempt_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_sentence_chars, 15);
        assert_eq!(config.min_sentence_tokens, 4);
        assert_eq!(config.max_option_tokens, 12);
        assert_eq!(config.attempt_limit(5), 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let config = GeneratorConfig::new().with_attempt_multiplier(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GeneratorConfig::new().with_max_option_tokens(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"attempt_multiplier": 5, "difficulty": "Hard"}"#).unwrap();
        assert_eq!(config.attempt_multiplier, 5);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.acronym_attempts, 50);
    }
}
