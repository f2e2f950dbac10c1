//! Domain types for decks of slide text and the questions generated from them.

use serde::{Deserialize, Serialize};

/// Number of options every generated question carries.
pub const OPTION_COUNT: usize = 4;

/// A full set of slides submitted for question generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Original filename (without path), if the deck came from a file.
    #[serde(default)]
    pub source: Option<String>,

    /// Slides in presentation order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck remembering the file it was read from.
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// True when the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Total number of raw content lines across all slides.
    pub fn line_count(&self) -> usize {
        self.slides.iter().map(|s| s.lines.len()).sum()
    }
}

impl From<Vec<Slide>> for Deck {
    fn from(slides: Vec<Slide>) -> Self {
        Self {
            source: None,
            slides,
        }
    }
}

/// One slide: an optional title and raw content lines in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,

    /// Raw, un-normalized content lines. Order matters and duplicates are kept.
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Slide {
    /// Create a slide without a title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slide with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            lines: Vec::new(),
        }
    }

    /// Builder-style variant of [`Slide::add_line`].
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Add a content line to this slide.
    pub fn add_line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// The title, if present and not blank.
    pub fn title_text(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Get non-empty content lines.
    pub fn non_empty_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|l| l.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// The format of an input file handed to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Modern PPTX (Office Open XML).
    Pptx,
    /// A deck serialized as JSON.
    Json,
}

impl InputFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from the first bytes of the file.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.len() >= 4 && bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }

        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') | Some(b'[') => Some(Self::Json),
            _ => None,
        }
    }
}

/// Kind of question, as reported to presentation and scoring layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionCategory {
    Definition,
    Fact,
    FillInBlank,
    NotQuestion,
}

impl QuestionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Definition => "DEFINITION",
            Self::Fact => "FACT",
            Self::FillInBlank => "FILL_IN_BLANK",
            Self::NotQuestion => "NOT_QUESTION",
        }
    }
}

/// Difficulty label stamped on every question of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,

    /// Exactly [`OPTION_COUNT`] distinct, non-empty options.
    pub options: Vec<String>,

    /// Index of the correct option in `options`.
    pub correct_index: usize,

    /// Source sentence the question was built from.
    pub explanation: String,

    pub category: QuestionCategory,
    pub difficulty: Difficulty,
}

impl Question {
    /// The text of the correct option.
    pub fn correct_answer(&self) -> &str {
        self.options
            .get(self.correct_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether `selected` is the correct option index.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    /// Check the invariants every emitted question must satisfy:
    /// non-empty prompt, exactly four pairwise-distinct non-blank options
    /// and an in-range correct index.
    pub fn is_well_formed(&self) -> bool {
        if self.prompt.trim().is_empty() || self.options.len() != OPTION_COUNT {
            return false;
        }
        if self.correct_index >= self.options.len() {
            return false;
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return false;
        }

        self.options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct_index: usize) -> Question {
        Question {
            prompt: "What is Rust?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: String::new(),
            category: QuestionCategory::Definition,
            difficulty: Difficulty::Normal,
        }
    }

    #[test]
    fn test_well_formed_question() {
        let q = question(&["a", "b", "c", "d"], 2);
        assert!(q.is_well_formed());
        assert_eq!(q.correct_answer(), "c");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_rejects_duplicate_options() {
        assert!(!question(&["a", "b", "a", "d"], 0).is_well_formed());
        // Case-sensitive comparison: differing case is distinct.
        assert!(question(&["a", "A", "b", "B"], 0).is_well_formed());
    }

    #[test]
    fn test_rejects_blank_options_and_bad_index() {
        assert!(!question(&["a", "  ", "c", "d"], 0).is_well_formed());
        assert!(!question(&["a", "b", "c", "d"], 4).is_well_formed());
        assert!(!question(&["a", "b", "c"], 0).is_well_formed());
        assert_eq!(question(&["a", "b", "c", "d"], 9).correct_answer(), "");
    }

    #[test]
    fn test_input_format_detection() {
        assert_eq!(InputFormat::from_extension("PPTX"), Some(InputFormat::Pptx));
        assert_eq!(InputFormat::from_extension("json"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_extension("ppt"), None);

        assert_eq!(
            InputFormat::from_magic(&[0x50, 0x4B, 0x03, 0x04, 0, 0]),
            Some(InputFormat::Pptx)
        );
        assert_eq!(InputFormat::from_magic(b"  \n{\"slides\":"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_magic(b"[]"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_magic(b"GIF8"), None);
    }

    #[test]
    fn test_slide_helpers() {
        let slide = Slide::with_title("  ")
            .line("First line of text")
            .line("   ")
            .line("Second line");
        assert_eq!(slide.title_text(), None);
        assert_eq!(slide.non_empty_lines(), vec!["First line of text", "Second line"]);

        let mut deck = Deck::with_source("lecture.pptx");
        assert!(deck.is_empty());
        deck.add_slide(slide);
        assert_eq!(deck.line_count(), 3);
    }

    #[test]
    fn test_category_serializes_screaming_case() {
        let json = serde_json::to_string(&QuestionCategory::FillInBlank).unwrap();
        assert_eq!(json, "\"FILL_IN_BLANK\"");
        assert_eq!(QuestionCategory::NotQuestion.label(), "NOT_QUESTION");
    }
}
