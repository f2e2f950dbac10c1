//! "What is {term}?" questions from definitional sentences.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use super::{assemble, option_text, strip_terminal, SlideContext};
use crate::distractor::{fill_with_definitions, OptionSet};
use crate::{GeneratorConfig, Question, QuestionCategory};

/// Connectives that separate a term from its definition.
static CONNECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+(is\s+an?|is\s+the|refers\s+to|means|is\s+defined\s+as|defined\s+as|is\s+known\s+as|represents)\s+",
    )
    .unwrap()
});

/// Longest term (in tokens) accepted as the subject of a definition.
const MAX_TERM_TOKENS: usize = 6;

/// Split a definitional sentence into `(term, definition)`.
pub fn split_definition(sentence: &str) -> Option<(String, String)> {
    let m = CONNECTIVE_REGEX.find(sentence)?;
    let term = strip_terminal(&sentence[..m.start()]);
    let definition = strip_terminal(&sentence[m.end()..]);

    let term_tokens = term.split_whitespace().count();
    if term_tokens == 0 || term_tokens > MAX_TERM_TOKENS || definition.is_empty() {
        return None;
    }

    Some((term.to_string(), definition.to_string()))
}

pub(super) fn generate<R: Rng + ?Sized>(
    slide: &SlideContext,
    deck: &[SlideContext],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    let mut candidates: Vec<&String> = slide.sentences.iter().collect();
    candidates.shuffle(rng);

    let (sentence, term, definition) = candidates.into_iter().find_map(|s| {
        split_definition(s).map(|(term, definition)| (s, term, definition))
    })?;

    let correct = option_text(&definition, config);
    let mut options = OptionSet::new(correct.as_str());

    let mut borrowed: Vec<String> = slide
        .others(deck)
        .filter(|other| !other.topic.eq_ignore_ascii_case(&slide.topic))
        .flat_map(|other| other.sentences.iter())
        .filter_map(|s| split_definition(s))
        .map(|(_, other_definition)| option_text(&other_definition, config))
        .collect();
    borrowed.shuffle(rng);
    options.extend(borrowed);

    if !options.is_full() {
        fill_with_definitions(&mut options, rng);
    }

    log::trace!("definition question for '{}' on slide {}", term, slide.index);

    assemble(
        format!("What is {}?", term),
        options,
        sentence,
        QuestionCategory::Definition,
        config,
        rng,
    )
}
