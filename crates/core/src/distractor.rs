//! Option-set assembly and synthetic wrong answers.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::types::OPTION_COUNT;

/// Last-resort option when no further distinct distractor can be made.
pub const NONE_OF_THE_ABOVE: &str = "None of the above";

/// Templates for fabricated definitions: subject, verb, object.
const FILLER_SUBJECTS: &[&str] = &[
    "A technique that",
    "A process that",
    "A component that",
    "A design pattern that",
    "A tool that",
];
const FILLER_VERBS: &[&str] = &["simplifies", "automates", "optimizes", "secures"];
const FILLER_OBJECTS: &[&str] = &[
    "managing application state",
    "handling network requests",
    "storing persistent data",
    "rendering user interfaces",
    "scheduling background tasks",
    "validating user input",
];

/// Generic technical nouns used when a slide has no spare keywords.
pub const DOMAIN_TERMS: &[&str] = &[
    "Algorithm",
    "Compiler",
    "Database",
    "Framework",
    "Protocol",
    "Interface",
    "Variable",
    "Function",
    "Module",
    "Kernel",
    "Repository",
    "Middleware",
];

/// Groups of confusable terms; any member may stand in for another.
const CONFUSABLE_GROUPS: &[&[&str]] = &[
    &["increases", "decreases", "reduces"],
    &["always", "never", "rarely"],
    &["before", "after"],
    &["client", "server", "browser"],
    &["input", "output"],
    &["first", "last"],
    &["public", "private", "protected"],
    &["static", "dynamic"],
    &["synchronous", "asynchronous"],
    &["can", "cannot"],
    &["faster", "slower"],
    &["more", "less"],
    &["hardware", "software", "firmware"],
    &["compile", "runtime"],
    &["stores", "deletes", "ignores"],
    &["allows", "prevents", "requires"],
    &["memory", "disk", "network"],
    &["stack", "heap", "queue"],
    &["local", "remote", "global"],
    &["encrypts", "compresses", "decodes"],
];

/// Copulas turned negative when no confusable term is present.
static COPULA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(is|are|can|will|does|do)\b").unwrap());

/// Collects one correct answer and up to three distinct distractors, then
/// shuffles them into a four-option list.
#[derive(Debug, Clone)]
pub struct OptionSet {
    correct: String,
    distractors: Vec<String>,
}

impl OptionSet {
    /// Start a set around the correct answer.
    pub fn new(correct: impl Into<String>) -> Self {
        Self {
            correct: correct.into().trim().to_string(),
            distractors: Vec::with_capacity(OPTION_COUNT - 1),
        }
    }

    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Number of distractor slots still open.
    pub fn remaining(&self) -> usize {
        OPTION_COUNT - 1 - self.distractors.len()
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// True if `candidate` is already one of the options.
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        candidate == self.correct || self.distractors.iter().any(|d| d == candidate)
    }

    /// Offer a distractor. Blank, duplicate or surplus candidates are refused.
    pub fn push(&mut self, candidate: impl AsRef<str>) -> bool {
        let candidate = candidate.as_ref().trim();
        if self.is_full() || candidate.is_empty() || self.contains(candidate) {
            return false;
        }
        self.distractors.push(candidate.to_string());
        true
    }

    /// Offer candidates in order until the set is full.
    pub fn extend<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            self.push(candidate);
        }
    }

    /// Fill one open slot with [`NONE_OF_THE_ABOVE`].
    pub fn pad_with_none(&mut self) {
        self.push(NONE_OF_THE_ABOVE);
    }

    /// Shuffle into the final option list and the index of the correct one.
    /// Returns `None` if the set is incomplete or the correct answer is blank.
    pub fn finish<R: Rng + ?Sized>(self, rng: &mut R) -> Option<(Vec<String>, usize)> {
        if !self.is_full() || self.correct.is_empty() {
            return None;
        }

        let mut tagged: Vec<(bool, String)> = Vec::with_capacity(OPTION_COUNT);
        tagged.push((true, self.correct));
        tagged.extend(self.distractors.into_iter().map(|d| (false, d)));
        tagged.shuffle(rng);

        let correct_index = tagged.iter().position(|(is_correct, _)| *is_correct)?;
        let options = tagged.into_iter().map(|(_, text)| text).collect();
        Some((options, correct_index))
    }
}

/// Fabricate a generic but plausible definition from the template lists.
pub fn filler_definition<R: Rng + ?Sized>(rng: &mut R) -> String {
    let subject = FILLER_SUBJECTS.choose(rng).copied().unwrap_or(FILLER_SUBJECTS[0]);
    let verb = FILLER_VERBS.choose(rng).copied().unwrap_or(FILLER_VERBS[0]);
    let object = FILLER_OBJECTS.choose(rng).copied().unwrap_or(FILLER_OBJECTS[0]);
    format!("{} {} {}", subject, verb, object)
}

/// Fill remaining slots with fabricated definitions, then "None of the above".
pub fn fill_with_definitions<R: Rng + ?Sized>(options: &mut OptionSet, rng: &mut R) {
    let max_attempts = FILLER_SUBJECTS.len() * FILLER_VERBS.len();
    let mut attempts = 0;
    while !options.is_full() && attempts < max_attempts {
        options.push(filler_definition(rng));
        attempts += 1;
    }
    if !options.is_full() {
        options.pad_with_none();
    }
}

/// Rewrite `sentence` into something that reads similarly but is wrong.
///
/// Swaps one confusable term for another member of its group, keeping the
/// capitalization. Sentences with no confusable term get their first copula
/// negated. Returns `None` if neither rewrite applies.
pub fn similar_but_wrong<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> Option<String> {
    let words: Vec<&str> = sentence.split(' ').collect();

    let swappable: Vec<(usize, &'static [&'static str])> = words
        .iter()
        .enumerate()
        .filter_map(|(i, word)| {
            let core = word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            CONFUSABLE_GROUPS
                .iter()
                .find(|group| group.contains(&core.as_str()))
                .map(|group| (i, *group))
        })
        .collect();

    if let Some(&(index, group)) = swappable.choose(rng) {
        let word = words[index];
        let core = word.trim_matches(|c: char| !c.is_alphanumeric());
        let lowered = core.to_lowercase();
        let alternatives: Vec<&str> = group.iter().copied().filter(|g| *g != lowered).collect();
        let replacement = alternatives.choose(rng)?;
        let replacement = if core.chars().next().is_some_and(char::is_uppercase) {
            capitalize(replacement)
        } else {
            replacement.to_string()
        };

        let mut rebuilt: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        rebuilt[index] = word.replacen(core, &replacement, 1);
        return Some(rebuilt.join(" "));
    }

    let negated = COPULA_REGEX.replacen(sentence, 1, "$1 not");
    if negated != sentence {
        return Some(negated.into_owned());
    }

    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_option_set_rejects_duplicates_and_blanks() {
        let mut options = OptionSet::new("Correct answer");
        assert!(!options.push("Correct answer"));
        assert!(!options.push("   "));
        assert!(options.push("Wrong one"));
        assert!(!options.push(" Wrong one "));
        assert!(options.push("wrong one"));
        assert_eq!(options.remaining(), 1);
    }

    #[test]
    fn test_option_set_finish_tracks_correct_index() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut options = OptionSet::new("right");
            options.extend(["w1", "w2", "w3", "w4"]);
            let (list, index) = options.finish(&mut rng).unwrap();
            assert_eq!(list.len(), 4);
            assert_eq!(list[index], "right");
            assert!(!list.contains(&"w4".to_string()));
        }
    }

    #[test]
    fn test_incomplete_set_does_not_finish() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut options = OptionSet::new("right");
        options.push("only one");
        assert!(options.finish(&mut rng).is_none());
    }

    #[test]
    fn test_pad_with_none_only_once() {
        let mut options = OptionSet::new("right");
        options.push("wrong");
        options.pad_with_none();
        options.pad_with_none();
        assert_eq!(options.remaining(), 1);
    }

    #[test]
    fn test_fill_with_definitions_completes_set() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut options = OptionSet::new("a named storage location");
        fill_with_definitions(&mut options, &mut rng);
        assert!(options.is_full());
        let (list, index) = options.finish(&mut rng).unwrap();
        assert_eq!(list[index], "a named storage location");
    }

    #[test]
    fn test_similar_but_wrong_swaps_confusable_term() {
        let mut rng = StdRng::seed_from_u64(2);
        let original = "Caching always increases read throughput.";
        for _ in 0..20 {
            let altered = similar_but_wrong(original, &mut rng).unwrap();
            assert_ne!(altered, original);
            assert_eq!(
                altered.split(' ').count(),
                original.split(' ').count()
            );
        }
    }

    #[test]
    fn test_similar_but_wrong_keeps_capitalization() {
        let mut rng = StdRng::seed_from_u64(4);
        let altered = similar_but_wrong("Static typing catches errors early.", &mut rng).unwrap();
        assert_eq!(altered, "Dynamic typing catches errors early.");
    }

    #[test]
    fn test_similar_but_wrong_negates_copula() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            similar_but_wrong("Ownership is checked by the borrow checker.", &mut rng),
            Some("Ownership is not checked by the borrow checker.".to_string())
        );
        assert_eq!(similar_but_wrong("Nothing to see here.", &mut rng), None);
    }
}
