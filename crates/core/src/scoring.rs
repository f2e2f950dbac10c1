//! Grading a set of answers against generated questions.

use serde::{Deserialize, Serialize};

use crate::Question;

/// Percentage at or above which a quiz counts as passed.
pub const PASS_PERCENTAGE: f32 = 60.0;

/// Outcome of grading one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub total: usize,
    pub correct: usize,
    /// Wrong plus unanswered questions.
    pub wrong: usize,
    pub percentage: f32,
}

impl QuizScore {
    /// Grade `answers` (one selected option index per question, `None` if
    /// skipped). Missing trailing answers count as skipped.
    pub fn compute(questions: &[Question], answers: &[Option<usize>]) -> Self {
        let total = questions.len();
        let correct = questions
            .iter()
            .zip(answers.iter().chain(std::iter::repeat(&None)))
            .filter(|(q, a)| a.is_some_and(|selected| q.is_correct(selected)))
            .count();

        let percentage = if total == 0 {
            0.0
        } else {
            correct as f32 * 100.0 / total as f32
        };

        Self {
            total,
            correct,
            wrong: total - correct,
            percentage,
        }
    }

    pub fn passed(&self) -> bool {
        self.total > 0 && self.percentage >= PASS_PERCENTAGE
    }
}
