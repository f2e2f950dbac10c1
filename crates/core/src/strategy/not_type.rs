//! "Which of the following is NOT related to {topic}?" questions.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{assemble, option_text, SlideContext};
use crate::distractor::OptionSet;
use crate::{GeneratorConfig, Question, QuestionCategory};

const MIN_SENTENCES: usize = 3;

pub(super) fn generate<R: Rng + ?Sized>(
    slide: &SlideContext,
    deck: &[SlideContext],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    if slide.sentences.len() < MIN_SENTENCES {
        return None;
    }

    let mut own: Vec<&String> = slide.sentences.iter().collect();
    own.shuffle(rng);
    let mut related: Vec<String> = Vec::with_capacity(MIN_SENTENCES);
    for text in own.iter().map(|s| option_text(s, config)) {
        if related.len() == MIN_SENTENCES {
            break;
        }
        if !related.contains(&text) {
            related.push(text);
        }
    }

    let mut others: Vec<&SlideContext> = slide
        .others(deck)
        .filter(|other| !other.sentences.is_empty())
        .collect();
    others.shuffle(rng);

    let (other, unrelated) = others.into_iter().find_map(|other| {
        let first = option_text(&other.sentences[0], config);
        (!related.contains(&first)).then_some((other, first))
    })?;

    let mut options = OptionSet::new(unrelated);
    options.extend(&related);
    if !options.is_full() {
        return None;
    }

    assemble(
        format!("Which of the following is NOT related to {}?", slide.topic),
        options,
        &format!(
            "\"{}\" belongs to {}, not {}.",
            other.sentences[0], other.topic, slide.topic
        ),
        QuestionCategory::NotQuestion,
        config,
        rng,
    )
}
