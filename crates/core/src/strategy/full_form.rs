//! "What does {ACRONYM} stand for?" questions with deceptive expansions.

use rand::Rng;

use super::{assemble, option_text, SlideContext};
use crate::acronym::extract_acronym;
use crate::deceive::deceive;
use crate::distractor::OptionSet;
use crate::{GeneratorConfig, Question, QuestionCategory};

pub(super) fn generate<R: Rng + ?Sized>(
    slide: &SlideContext,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    let fact = extract_acronym(&slide.sentences)?;
    let correct = option_text(&fact.expansion, config);
    let mut options = OptionSet::new(correct.as_str());

    let mut attempts = 0;
    while !options.is_full() && attempts < config.acronym_attempts {
        attempts += 1;
        let fake = deceive(&correct, rng);
        if fake.eq_ignore_ascii_case(&correct) || fake.eq_ignore_ascii_case(&fact.acronym) {
            continue;
        }
        options.push(fake);
    }

    if !options.is_full() {
        log::debug!(
            "only {} deceptive expansions for {} after {} attempts",
            crate::types::OPTION_COUNT - 1 - options.remaining(),
            fact.acronym,
            attempts
        );
        options.pad_with_none();
    }

    assemble(
        format!("What does {} stand for?", fact.acronym),
        options,
        &fact.sentence,
        QuestionCategory::Definition,
        config,
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::context;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_acronym_question_shape() {
        let slide = context(
            0,
            "Networking",
            &["The DNS (Domain Name System) resolves host names."],
        );
        let mut rng = StdRng::seed_from_u64(31);

        let q = generate(&slide, &GeneratorConfig::default(), &mut rng).unwrap();

        assert_eq!(q.prompt, "What does DNS stand for?");
        assert_eq!(q.correct_answer(), "Domain Name System");
        assert_eq!(q.category, QuestionCategory::Definition);
        assert!(q.is_well_formed());
        for (i, option) in q.options.iter().enumerate() {
            if i != q.correct_index {
                assert!(!option.eq_ignore_ascii_case("Domain Name System"));
            }
        }
    }

    #[test]
    fn test_one_attempt_cannot_fill_three_slots() {
        // With a budget of one draw at most one deceptive option exists, so
        // after padding one slot stays open and the strategy declines.
        let slide = context(0, "Memory", &["RAM stands for Random Access Memory."]);
        let config = GeneratorConfig::default().with_acronym_attempts(1);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate(&slide, &config, &mut rng).is_none());
    }

    #[test]
    fn test_declines_without_acronym() {
        let slide = context(0, "Memory", &["Memory is managed by the allocator."]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&slide, &GeneratorConfig::default(), &mut rng).is_none());
    }
}
