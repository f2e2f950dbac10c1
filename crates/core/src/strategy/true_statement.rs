//! "Which statement is true about {topic}?" questions.
//!
//! Known property: besides the correct sentence, up to two more real
//! sentences from the same slide are offered. They are true as well, but
//! only the first one is scored as correct.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{assemble, option_text, SlideContext};
use crate::distractor::{similar_but_wrong, OptionSet};
use crate::{GeneratorConfig, Question, QuestionCategory};

/// Minimum sentences on the slide for this question type.
const MIN_SENTENCES: usize = 3;

/// Extra real sentences offered next to the correct one.
const MAX_SIBLINGS: usize = 2;

/// Rewrites tried per open slot before padding.
const REWRITE_ATTEMPTS: usize = 10;

pub(super) fn generate<R: Rng + ?Sized>(
    slide: &SlideContext,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    if slide.sentences.len() < MIN_SENTENCES {
        return None;
    }

    let mut shuffled: Vec<&String> = slide.sentences.iter().collect();
    shuffled.shuffle(rng);

    let source = shuffled[0];
    let correct = option_text(source, config);
    let mut options = OptionSet::new(correct.as_str());

    options.extend(
        shuffled[1..]
            .iter()
            .take(MAX_SIBLINGS)
            .map(|s| option_text(s, config)),
    );

    let mut attempts = 0;
    while !options.is_full() && attempts < REWRITE_ATTEMPTS * options.remaining() {
        if let Some(altered) = similar_but_wrong(&correct, rng) {
            options.push(altered);
        }
        attempts += 1;
    }
    if !options.is_full() {
        options.pad_with_none();
    }

    assemble(
        format!("Which statement is true about {}?", slide.topic),
        options,
        source,
        QuestionCategory::Fact,
        config,
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distractor::NONE_OF_THE_ABOVE;
    use crate::strategy::test_support::context;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SENTENCES: &[&str] = &[
        "Caching always increases read throughput.",
        "Cache entries expire after a configured time.",
        "Eviction removes the least recently used entry.",
    ];

    #[test]
    fn test_offers_slide_sentences_and_one_rewrite() {
        let slide = context(0, "Caching", SENTENCES);
        let mut rng = StdRng::seed_from_u64(21);

        let q = generate(&slide, &GeneratorConfig::default(), &mut rng).unwrap();

        assert_eq!(q.prompt, "Which statement is true about Caching?");
        assert!(q.is_well_formed());
        assert!(SENTENCES.contains(&q.correct_answer()));
        assert_eq!(q.explanation, q.correct_answer());
        // Three options are real sentences: the correct one and two siblings.
        let real = q
            .options
            .iter()
            .filter(|o| SENTENCES.contains(&o.as_str()))
            .count();
        assert_eq!(real, 3);
        assert_eq!(q.category, QuestionCategory::Fact);
    }

    #[test]
    fn test_pads_when_no_rewrite_possible() {
        let slide = context(
            0,
            "Rust",
            &[
                "Rust programs become native binaries.",
                "Cargo builds Rust projects quickly.",
                "Crates bundle reusable library code.",
            ],
        );
        let mut rng = StdRng::seed_from_u64(2);

        let q = generate(&slide, &GeneratorConfig::default(), &mut rng).unwrap();
        assert!(q.is_well_formed());
        assert!(q.options.contains(&NONE_OF_THE_ABOVE.to_string()));
    }

    #[test]
    fn test_declines_with_too_few_sentences() {
        let slide = context(0, "Caching", &SENTENCES[..2]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&slide, &GeneratorConfig::default(), &mut rng).is_none());
    }

    #[test]
    fn test_truncates_long_sentences() {
        let slide = context(
            0,
            "Caching",
            &[
                "one two three four five six seven eight nine ten eleven twelve thirteen fourteen.",
                "one two three four five six seven eight nine ten eleven twelve thirteen.",
                "Short sentence that is under the limit.",
            ],
        );
        let mut rng = StdRng::seed_from_u64(4);
        let config = GeneratorConfig::default();

        // Both long sentences truncate to the same twelve tokens, so at most
        // one of them survives as an option.
        if let Some(q) = generate(&slide, &config, &mut rng) {
            assert!(q.is_well_formed());
            assert!(q.options.iter().all(|o| o.split_whitespace().count() <= 12));
        }
    }
}
