//! Plain-text quiz output.
//!
//! Renders numbered questions with lettered options, one blank line
//! between questions, optionally followed by the answer and explanation.

use crate::Question;

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formatter for printable quiz text.
#[derive(Debug, Clone, Default)]
pub struct QuizFormatter {
    /// Append an "Answer: X" line to each question.
    show_answers: bool,
    /// Append the source sentence to each question.
    show_explanations: bool,
}

impl QuizFormatter {
    /// Create a formatter that prints questions and options only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(mut self, show: bool) -> Self {
        self.show_answers = show;
        self
    }

    pub fn with_explanations(mut self, show: bool) -> Self {
        self.show_explanations = show;
        self
    }

    /// Format one question, numbered from 1.
    ///
    /// # Example output
    /// ```text
    /// 1. What does HTTP stand for?
    ///    A) Hybrid Transfer Protocol
    ///    B) HyperText Transfer Protocol
    ///    C) Host Token Packet
    ///    D) Heap Transport Protocol
    ///    Answer: B
    /// ```
    pub fn format_question(&self, number: usize, question: &Question) -> String {
        let mut lines = vec![format!("{}. {}", number, question.prompt)];

        for (letter, option) in OPTION_LETTERS.iter().zip(&question.options) {
            lines.push(format!("   {}) {}", letter, option));
        }

        if self.show_answers {
            if let Some(letter) = OPTION_LETTERS.get(question.correct_index) {
                lines.push(format!("   Answer: {}", letter));
            }
        }
        if self.show_explanations && !question.explanation.is_empty() {
            lines.push(format!("   Explanation: {}", question.explanation));
        }

        lines.join("\n")
    }

    /// Format all questions, separated by blank lines.
    pub fn format(&self, questions: &[Question]) -> String {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| self.format_question(i + 1, q))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format and add a trailing newline (nothing for an empty quiz).
    pub fn format_with_newline(&self, questions: &[Question]) -> String {
        let formatted = self.format(questions);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, QuestionCategory};

    fn question() -> Question {
        Question {
            prompt: "What does RAM stand for?".to_string(),
            options: vec![
                "Remote Access Memory".into(),
                "Random Access Memory".into(),
                "Random Allocation Module".into(),
                "Runtime Access Machine".into(),
            ],
            correct_index: 1,
            explanation: "RAM stands for Random Access Memory.".to_string(),
            category: QuestionCategory::Definition,
            difficulty: Difficulty::Normal,
        }
    }

    #[test]
    fn test_format_empty() {
        let formatter = QuizFormatter::new();
        assert_eq!(formatter.format(&[]), "");
        assert_eq!(formatter.format_with_newline(&[]), "");
    }

    #[test]
    fn test_format_single_question() {
        let formatter = QuizFormatter::new();
        let expected = "1. What does RAM stand for?\n   A) Remote Access Memory\n   B) Random Access Memory\n   C) Random Allocation Module\n   D) Runtime Access Machine";
        assert_eq!(formatter.format(&[question()]), expected);
    }

    #[test]
    fn test_format_with_answers_and_explanations() {
        let formatter = QuizFormatter::new().with_answers(true).with_explanations(true);
        let output = formatter.format_question(3, &question());
        assert!(output.starts_with("3. What does RAM stand for?"));
        assert!(output.contains("\n   Answer: B"));
        assert!(output.ends_with("Explanation: RAM stands for Random Access Memory."));
    }

    #[test]
    fn test_questions_separated_by_blank_line() {
        let formatter = QuizFormatter::new();
        let output = formatter.format_with_newline(&[question(), question()]);
        assert!(output.contains("Machine\n\n2. What does"));
        assert!(output.ends_with('\n'));
    }
}
