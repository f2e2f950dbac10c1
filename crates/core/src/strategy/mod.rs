//! Question-type strategies.
//!
//! Each strategy looks for a structural cue in one slide's sentences and
//! either builds a question or declines with `None`. Declining is routine:
//! the orchestrator simply moves on to the next attempt.

mod definition;
mod fill_blank;
mod full_form;
mod not_type;
mod true_statement;

use rand::Rng;

use crate::distractor::OptionSet;
use crate::normalize::truncate_tokens;
use crate::{GeneratorConfig, Question, QuestionCategory, SentenceNormalizer, Slide};

pub use definition::split_definition;
pub use fill_blank::BLANK_MARKER;

/// A slide prepared for question generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideContext {
    /// Position of the slide in the deck.
    pub index: usize,
    pub topic: String,
    pub sentences: Vec<String>,
}

impl SlideContext {
    /// Derive topic and sentences for the slide at `index`.
    pub fn prepare(index: usize, slide: &Slide, normalizer: &SentenceNormalizer) -> Self {
        Self {
            index,
            topic: crate::topic::topic(slide),
            sentences: normalizer.normalize(&slide.lines),
        }
    }

    /// Slides of `deck` other than this one.
    pub fn others<'a>(&'a self, deck: &'a [SlideContext]) -> impl Iterator<Item = &'a SlideContext> {
        deck.iter().filter(move |other| other.index != self.index)
    }
}

/// The question types the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Definition,
    TrueStatement,
    NotType,
    FillBlank,
    Acronym,
}

impl Strategy {
    /// Every strategy, in the order the random pick draws from.
    pub const ALL: [Strategy; 5] = [
        Strategy::Definition,
        Strategy::TrueStatement,
        Strategy::NotType,
        Strategy::FillBlank,
        Strategy::Acronym,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::TrueStatement => "true-statement",
            Self::NotType => "not-type",
            Self::FillBlank => "fill-blank",
            Self::Acronym => "acronym",
        }
    }

    /// Try to build a question of this type from `slide`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        slide: &SlideContext,
        deck: &[SlideContext],
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Option<Question> {
        match self {
            Self::Definition => definition::generate(slide, deck, config, rng),
            Self::TrueStatement => true_statement::generate(slide, config, rng),
            Self::NotType => not_type::generate(slide, deck, config, rng),
            Self::FillBlank => fill_blank::generate(slide, config, rng),
            Self::Acronym => full_form::generate(slide, config, rng),
        }
    }
}

/// Shuffle a finished option set into a question.
fn assemble<R: Rng + ?Sized>(
    prompt: String,
    options: OptionSet,
    explanation: &str,
    category: QuestionCategory,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    let (options, correct_index) = options.finish(rng)?;
    Some(Question {
        prompt,
        options,
        correct_index,
        explanation: explanation.to_string(),
        category,
        difficulty: config.difficulty,
    })
}

/// Source text cut for use as an option.
fn option_text(text: &str, config: &GeneratorConfig) -> String {
    truncate_tokens(text, config.max_option_tokens)
}

/// Strip sentence-final punctuation from a phrase.
fn strip_terminal(text: &str) -> &str {
    text.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
        .trim_end()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_normalizes_slide() {
        let slide = Slide::with_title("Introduction of Queues")
            .line("• A queue is a first-in first-out structure")
            .line("tiny");
        let ctx = SlideContext::prepare(3, &slide, &SentenceNormalizer::new());

        assert_eq!(ctx.index, 3);
        assert_eq!(ctx.topic, "Queues");
        assert_eq!(ctx.sentences, vec!["A queue is a first-in first-out structure."]);
    }

    #[test]
    fn test_others_excludes_self() {
        let deck = vec![
            test_support::context(0, "A", &[]),
            test_support::context(1, "B", &[]),
            test_support::context(2, "C", &[]),
        ];
        let topics: Vec<&str> = deck[1].others(&deck).map(|s| s.topic.as_str()).collect();
        assert_eq!(topics, vec!["A", "C"]);
    }

    #[test]
    fn test_strip_terminal() {
        assert_eq!(strip_terminal("a named location. "), "a named location");
        assert_eq!(strip_terminal("Why?"), "Why");
    }
}
