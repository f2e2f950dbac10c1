//! Multiple-choice question synthesis from slide text.
//!
//! Turns a deck of slides (optional title plus raw content lines) into
//! four-option questions using pattern heuristics only: sentence
//! normalization, topic and acronym detection, five question strategies
//! and distractor synthesis, driven by a bounded-retry orchestrator.

pub mod acronym;
pub mod config;
pub mod deceive;
pub mod distractor;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod render;
pub mod scoring;
pub mod strategy;
pub mod topic;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{generate, QuestionGenerator};
pub use normalize::SentenceNormalizer;
pub use render::QuizFormatter;
pub use scoring::QuizScore;
pub use strategy::{SlideContext, Strategy};
pub use types::{Deck, Difficulty, InputFormat, Question, QuestionCategory, Slide};
