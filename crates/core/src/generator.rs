//! Question generation orchestrator.
//!
//! Walks the deck's slides in shuffled order, reshuffling after each full
//! pass, and makes one strategy attempt per step until enough questions
//! are accepted or the attempt budget (requested count times the
//! configured multiplier) runs out. A short result is a normal outcome.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::acronym::has_acronym_pattern;
use crate::strategy::{SlideContext, Strategy};
use crate::{Deck, GeneratorConfig, Question, SentenceNormalizer};

/// Generates multiple-choice questions from a deck.
#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator {
    config: GeneratorConfig,
    normalizer: SentenceNormalizer,
}

impl QuestionGenerator {
    /// Create a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let normalizer = SentenceNormalizer::from_config(&config);
        Self { config, normalizer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Normalize every slide and derive its topic.
    ///
    /// Slides left without any usable sentence are dropped; indices still
    /// refer to positions in the original deck.
    pub fn prepare(&self, deck: &Deck) -> Vec<SlideContext> {
        deck.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideContext::prepare(index, slide, &self.normalizer))
            .filter(|ctx| !ctx.sentences.is_empty())
            .collect()
    }

    /// Generate up to `requested` questions from `deck`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        deck: &Deck,
        requested: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut questions = Vec::new();
        if requested == 0 || deck.is_empty() {
            return questions;
        }

        let slides = self.prepare(deck);
        if !self.has_enough_content(&slides) {
            log::debug!(
                "not enough content: {} usable slides, {} sentences",
                slides.len(),
                slides.iter().map(|s| s.sentences.len()).sum::<usize>()
            );
            return questions;
        }

        let acronym_slides: Vec<bool> = slides
            .iter()
            .map(|s| has_acronym_pattern(&s.sentences))
            .collect();

        let mut cycle = SlideCycle::new(slides.len(), rng);
        let max_attempts = self.config.attempt_limit(requested);
        let mut attempts = 0;

        while questions.len() < requested && attempts < max_attempts {
            let position = cycle.next(rng);
            attempts += 1;

            let slide = &slides[position];
            let Some(question) = self.attempt(slide, &slides, acronym_slides[position], rng) else {
                continue;
            };

            if question.is_well_formed() {
                questions.push(question);
            } else {
                log::trace!("discarded malformed question: {}", question.prompt);
            }
        }

        log::debug!(
            "generated {}/{} questions in {} attempts from {} slides",
            questions.len(),
            requested,
            attempts,
            slides.len()
        );

        questions
    }

    /// Generate with a reproducible random source seeded from `seed`.
    pub fn generate_seeded(&self, deck: &Deck, requested: usize, seed: u64) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(deck, requested, &mut rng)
    }

    /// One attempt on one slide: acronym facts first, else a random strategy.
    fn attempt<R: Rng + ?Sized>(
        &self,
        slide: &SlideContext,
        slides: &[SlideContext],
        has_acronym: bool,
        rng: &mut R,
    ) -> Option<Question> {
        if has_acronym {
            if let Some(question) = Strategy::Acronym.generate(slide, slides, &self.config, rng) {
                log::trace!("slide {}: acronym strategy (priority)", slide.index);
                return Some(question);
            }
        }

        let strategy = *Strategy::ALL.choose(rng)?;
        let question = strategy.generate(slide, slides, &self.config, rng);
        log::trace!(
            "slide {}: {} strategy {}",
            slide.index,
            strategy.name(),
            if question.is_some() { "succeeded" } else { "declined" }
        );
        question
    }

    /// Sparse decks yield nothing unless they state an acronym expansion.
    fn has_enough_content(&self, slides: &[SlideContext]) -> bool {
        let sentences: usize = slides.iter().map(|s| s.sentences.len()).sum();
        sentences >= self.config.min_deck_sentences
            || slides.iter().any(|s| has_acronym_pattern(&s.sentences))
    }
}

/// Visits every slide position once per pass, in a fresh random order each pass.
#[derive(Debug)]
struct SlideCycle {
    order: Vec<usize>,
    cursor: usize,
}

impl SlideCycle {
    fn new<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        Self { order, cursor: 0 }
    }

    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.cursor == self.order.len() {
            self.order.shuffle(rng);
            self.cursor = 0;
        }
        let position = self.order[self.cursor];
        self.cursor += 1;
        position
    }
}

/// Generate questions with the default configuration.
pub fn generate<R: Rng + ?Sized>(deck: &Deck, requested: usize, rng: &mut R) -> Vec<Question> {
    QuestionGenerator::new().generate(deck, requested, rng)
}
