//! Label normalization.
//!
//! A raw label is turned into its comparison form by an ordered list of pure
//! steps:
//!
//! 1. lowercase
//! 2. delete punctuation (`.` `,` `'` `(` `)` `-` and title marks `?` `!` `:`)
//! 3. expand the standalone token `st` to `saint`
//! 4. remove noise words and phrases (mascots, market boilerplate)
//! 5. collapse whitespace
//!
//! Expansion runs before noise removal so multi-word noise phrases containing
//! "saint" still match. Normalizing an already normalized label is a no-op.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ConfigError;

/// Characters deleted outright (no space inserted).
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '\'', '\u{2019}', '(', ')', '-', '?', '!', ':'];

fn saint_pattern() -> &'static Regex {
    static SAINT: OnceLock<Regex> = OnceLock::new();
    SAINT.get_or_init(|| Regex::new(r"\bst\b").expect("valid saint pattern"))
}

/// One transformation in the normalization pipeline.
#[derive(Debug, Clone)]
pub enum NormalizeStep {
    Lowercase,
    StripPunctuation,
    ExpandSaint,
    RemoveNoise(NoisePattern),
    CollapseWhitespace,
}

impl NormalizeStep {
    pub fn name(&self) -> &'static str {
        match self {
            NormalizeStep::Lowercase => "lowercase",
            NormalizeStep::StripPunctuation => "strip_punctuation",
            NormalizeStep::ExpandSaint => "expand_saint",
            NormalizeStep::RemoveNoise(_) => "remove_noise",
            NormalizeStep::CollapseWhitespace => "collapse_whitespace",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            NormalizeStep::Lowercase => input.to_lowercase(),
            NormalizeStep::StripPunctuation => input
                .chars()
                .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
                .collect(),
            NormalizeStep::ExpandSaint => saint_pattern().replace_all(input, "saint").into_owned(),
            NormalizeStep::RemoveNoise(pattern) => pattern.remove_from(input),
            NormalizeStep::CollapseWhitespace => collapse_whitespace(input),
        }
    }
}

/// Compiled alternation of every noise phrase, matched on word boundaries.
#[derive(Debug, Clone)]
pub struct NoisePattern {
    regex: Regex,
    phrases: Vec<String>,
}

impl NoisePattern {
    /// Compile noise phrases. Each phrase is first brought into comparison
    /// form (steps 1-3 and 5) so it lines up with the text it is removed from.
    /// Returns `Ok(None)` when no phrase survives that preparation.
    pub fn compile(noise_words: &[String]) -> Result<Option<Self>, ConfigError> {
        let mut phrases: Vec<String> = noise_words
            .iter()
            .map(|w| prepare_phrase(w))
            .filter(|w| !w.is_empty())
            .collect();
        if phrases.is_empty() {
            return Ok(None);
        }

        // Longest first so "blue devils" wins over a bare "devils"
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();

        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"\b(?:{})\b", alternation))?;

        Ok(Some(Self { regex, phrases }))
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Remove every noise phrase. Repeats until stable because removing one
    /// phrase can bring the words of another phrase together.
    fn remove_from(&self, input: &str) -> String {
        let mut current = collapse_whitespace(input);
        loop {
            let next = collapse_whitespace(&self.regex.replace_all(&current, " "));
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn prepare_phrase(phrase: &str) -> String {
    [
        NormalizeStep::Lowercase,
        NormalizeStep::StripPunctuation,
        NormalizeStep::ExpandSaint,
        NormalizeStep::CollapseWhitespace,
    ]
    .iter()
    .fold(phrase.to_string(), |acc, step| step.apply(&acc))
}

/// Ordered normalization pipeline.
#[derive(Debug, Clone)]
pub struct Normalizer {
    steps: Vec<NormalizeStep>,
}

impl Normalizer {
    /// Build the standard pipeline with the given noise words.
    pub fn new(noise_words: &[String]) -> Result<Self, ConfigError> {
        let mut steps = vec![
            NormalizeStep::Lowercase,
            NormalizeStep::StripPunctuation,
            NormalizeStep::ExpandSaint,
        ];
        if let Some(pattern) = NoisePattern::compile(noise_words)? {
            steps.push(NormalizeStep::RemoveNoise(pattern));
        }
        steps.push(NormalizeStep::CollapseWhitespace);
        Ok(Self { steps })
    }

    /// Pipeline without a noise step.
    pub fn without_noise() -> Self {
        Self {
            steps: vec![
                NormalizeStep::Lowercase,
                NormalizeStep::StripPunctuation,
                NormalizeStep::ExpandSaint,
                NormalizeStep::CollapseWhitespace,
            ],
        }
    }

    pub fn steps(&self) -> &[NormalizeStep] {
        &self.steps
    }

    /// Normalize a raw label. May return the empty string when every token
    /// was noise; callers treat that as unresolvable.
    pub fn normalize(&self, raw: &str) -> String {
        self.steps
            .iter()
            .fold(raw.to_string(), |acc, step| step.apply(&acc))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::without_noise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn normalizer(words: &[&str]) -> Normalizer {
        Normalizer::new(&noise(words)).unwrap()
    }

    #[test]
    fn test_lowercase_and_punctuation() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("Texas A.&M."), "texas a&m");
        assert_eq!(n.normalize("K-State"), "kstate");
        assert_eq!(n.normalize("St. Mary's (CA)"), "saint marys ca");
        assert_eq!(n.normalize("Who wins? UConn!"), "who wins uconn");
    }

    #[test]
    fn test_saint_expansion_is_word_bounded() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("St Louis"), "saint louis");
        assert_eq!(n.normalize("ST. JOHN'S"), "saint johns");
        assert_eq!(n.normalize("Stanford"), "stanford");
        assert_eq!(n.normalize("Michigan St."), "michigan saint");
        assert_eq!(n.normalize("East"), "east");
    }

    #[test]
    fn test_noise_removal() {
        let n = normalizer(&["huskies", "blue devils", "winner"]);
        assert_eq!(n.normalize("UConn Huskies"), "uconn");
        assert_eq!(n.normalize("Duke Blue Devils Winner?"), "duke");
        // Word boundaries: "huskiesville" is not a noise word
        assert_eq!(n.normalize("Huskiesville"), "huskiesville");
        // A bare "devils" is not the phrase "blue devils"
        assert_eq!(n.normalize("New Jersey Devils"), "new jersey devils");
    }

    #[test]
    fn test_noise_phrase_after_expansion() {
        let n = normalizer(&["St. John's Red Storm"]);
        assert_eq!(n.normalize("Saint Johns Red Storm"), "");
        assert_eq!(n.normalize("Providence vs St. John's Red Storm"), "providence vs");
    }

    #[test]
    fn test_noise_removal_reaches_fixpoint() {
        let n = normalizer(&["blue devils", "tar heels"]);
        let once = n.normalize("Blue Tar Heels Devils");
        assert_eq!(once, "");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_all_noise_yields_empty() {
        let n = normalizer(&["huskies"]);
        assert_eq!(n.normalize("  Huskies  "), "");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("  Louisiana \t  State \n"), "louisiana state");
    }

    #[test]
    fn test_pipeline_order() {
        let n = normalizer(&["huskies"]);
        let names: Vec<&str> = n.steps().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["lowercase", "strip_punctuation", "expand_saint", "remove_noise", "collapse_whitespace"]
        );
    }

    #[test]
    fn test_empty_noise_phrases_skip_noise_step() {
        let n = Normalizer::new(&noise(&["", " - ", "..."])).unwrap();
        assert_eq!(n.steps().len(), 4);
        assert!(NoisePattern::compile(&[]).unwrap().is_none());
    }

    #[test]
    fn test_noise_phrases_prepared_and_sorted() {
        let pattern = NoisePattern::compile(&noise(&["Devils", "Blue Devils", "devils"]))
            .unwrap()
            .unwrap();
        assert_eq!(pattern.phrases(), &["blue devils".to_string(), "devils".to_string()]);
    }

    #[test]
    fn test_idempotent_on_examples() {
        let n = normalizer(&["huskies", "winner", "blue devils"]);
        for raw in ["UConn Huskies", "St. Louis", "Duke Blue Devils", "O'Neil - (W)", "LSU vs UConn Winner?"] {
            let once = n.normalize(raw);
            assert_eq!(n.normalize(&once), once, "not a fixpoint for {raw:?}");
        }
    }
}
