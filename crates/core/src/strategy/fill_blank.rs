//! Fill-in-the-blank questions that hide the subject of an "is"/"are" sentence.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use super::{assemble, strip_terminal, SlideContext};
use crate::distractor::{OptionSet, DOMAIN_TERMS};
use crate::{GeneratorConfig, Question, QuestionCategory};

/// Marker that replaces the hidden subject in the prompt.
pub const BLANK_MARKER: &str = "______";

const PROMPT_PREFIX: &str = "Fill in the blank:";

/// Standalone copula splitting subject from predicate.
static COPULA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(is|are)\b").unwrap());

/// Sentences must have more tokens than this.
const MIN_TOKENS_EXCLUSIVE: usize = 5;

/// Longest subject (in tokens) that can be blanked.
const MAX_SUBJECT_TOKENS: usize = 4;

/// Words never used as keyword distractors.
const STOPWORDS: &[&str] = &[
    "the", "this", "that", "these", "those", "they", "there", "their", "then", "when", "what",
    "which", "where", "while", "with", "also", "each", "some", "many", "most", "other", "such",
    "every", "from", "into", "about", "because", "although",
];

/// Split `sentence` into `(subject, predicate)` around its first copula.
fn split_subject(sentence: &str) -> Option<(String, String)> {
    if sentence.split_whitespace().count() <= MIN_TOKENS_EXCLUSIVE {
        return None;
    }

    let m = COPULA_REGEX.find(sentence)?;
    let subject = strip_terminal(&sentence[..m.start()]);
    let predicate = sentence[m.start()..].trim();

    let subject_tokens = subject.split_whitespace().count();
    if subject_tokens == 0 || subject_tokens > MAX_SUBJECT_TOKENS {
        return None;
    }
    if !subject.chars().any(char::is_alphanumeric) {
        return None;
    }
    // The prompt would give the answer away.
    let visible = format!("{} {}", PROMPT_PREFIX, predicate).to_lowercase();
    if visible.contains(&subject.to_lowercase()) {
        return None;
    }

    Some((subject.to_string(), predicate.to_string()))
}

/// First capitalized, non-stopword token longer than three characters.
fn keyword(sentence: &str) -> Option<String> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|w| {
            w.chars().count() > 3
                && w.chars().next().is_some_and(char::is_uppercase)
                && !STOPWORDS.contains(&w.to_lowercase().as_str())
        })
        .map(str::to_string)
}

pub(super) fn generate<R: Rng + ?Sized>(
    slide: &SlideContext,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Question> {
    let mut candidates: Vec<&String> = slide.sentences.iter().collect();
    candidates.shuffle(rng);

    let (sentence, subject, predicate) = candidates
        .into_iter()
        .find_map(|s| split_subject(s).map(|(subject, predicate)| (s, subject, predicate)))?;

    let mut options = OptionSet::new(subject.as_str());
    let differs = |w: &str| !w.eq_ignore_ascii_case(&subject);

    let keywords: Vec<String> = slide
        .sentences
        .iter()
        .filter(|s| *s != sentence)
        .filter_map(|s| keyword(s))
        .filter(|w| differs(w.as_str()))
        .collect();
    options.extend(keywords);

    if !options.is_full() {
        let mut terms: Vec<&str> = DOMAIN_TERMS.iter().copied().filter(|t| differs(*t)).collect();
        terms.shuffle(rng);
        options.extend(terms);
    }
    if !options.is_full() {
        options.pad_with_none();
    }

    assemble(
        format!("{} {} {}", PROMPT_PREFIX, BLANK_MARKER, predicate),
        options,
        sentence,
        QuestionCategory::FillInBlank,
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
    fn test_split_subject() {
        assert_eq!(
            split_subject("Python is a popular scripting language."),
            Some((
                "Python".to_string(),
                "is a popular scripting language.".to_string()
            ))
        );
        assert_eq!(
            split_subject("Linked lists are chains of nodes."),
            Some(("Linked lists".to_string(), "are chains of nodes.".to_string()))
        );
    }

    #[test]
    fn test_rejects_subject_echoed_by_prompt_prefix() {
        assert_eq!(split_subject("Fill is a command that copies cell values downward."), None);

        let slide = context(
            0,
            "Spreadsheets",
            &["Fill is a command that copies cell values downward."],
        );
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&slide, &GeneratorConfig::default(), &mut rng).is_none());
    }

    #[test]
    fn test_split_requires_more_than_five_tokens() {
        assert_eq!(split_subject("Python is very popular."), None);
        assert_eq!(split_subject("Python is popular with new learners."), Some((
            "Python".to_string(),
            "is popular with new learners.".to_string()
        )));
    }

    #[test]
    fn test_split_ignores_embedded_copula() {
        // "this" and "island" must not count as the copula.
        assert_eq!(split_subject("Thistle island grows here without any water."), None);
    }

    #[test]
    fn test_split_rejects_leaking_predicate() {
        assert_eq!(split_subject("Java is not the same thing as JavaScript."), None);
    }

    #[test]
    fn test_keyword_extraction() {
        assert_eq!(keyword("The Compiler turns source into machine code."), Some("Compiler".to_string()));
        assert_eq!(keyword("This is all lowercase after that."), None);
    }

    #[test]
    fn test_prompt_hides_subject() {
        let slide = context(
            0,
            "Languages",
            &[
                "Python is a popular scripting language.",
                "Django builds web applications in Python.",
                "Flask offers a lighter alternative.",
            ],
        );
        let mut rng = StdRng::seed_from_u64(17);

        let q = generate(&slide, &GeneratorConfig::default(), &mut rng).unwrap();

        assert_eq!(q.prompt, "Fill in the blank: ______ is a popular scripting language.");
        assert!(!q.prompt.contains("Python"));
        assert_eq!(q.correct_answer(), "Python");
        assert!(q.options.contains(&"Django".to_string()));
        assert!(q.options.contains(&"Flask".to_string()));
        assert_eq!(q.category, QuestionCategory::FillInBlank);
        assert!(q.is_well_formed());
    }

    #[test]
    fn test_declines_without_copula() {
        let slide = context(0, "Threads", &["Threads run concurrently inside one process."]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&slide, &GeneratorConfig::default(), &mut rng).is_none());
    }
}
