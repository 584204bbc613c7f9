//! Typed-text context classification.
//!
//! The classifier decides how oracle output gets blended: an introduction
//! phrase promotes name-dictionary matches, a fresh sentence promotes
//! next-word suggestions, and mid-sentence text gets no blending at all.
//! Classification is a pure string predicate over the committed text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils;

/// Trailing whitespace/punctuation stripped before intro-phrase matching,
/// so "My name is:" still counts as an introduction.
static TRAILING_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\p{P}]+$").expect("trailing-noise pattern is a fixed literal")
});

/// What the committed text says about the next word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContext {
    /// Context ends with an introduction phrase; a proper name is likely.
    NameExpected,
    /// Empty context or a finished sentence; a sentence opener is likely.
    SentenceStart,
    /// Anywhere else in a sentence.
    MidSentence,
}

/// Pure classifier over typed-text context.
///
/// The introduction phrase set is configuration (`Config::intro_phrases`);
/// phrases are matched case-insensitively at the end of the context, on a
/// word boundary, ignoring trailing punctuation.
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    /// Lowercased introduction phrases.
    intro_phrases: Vec<String>,
}

impl ContextClassifier {
    pub fn new<I, S>(intro_phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            intro_phrases: intro_phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Classify `text`. NameExpected is checked before SentenceStart;
    /// an empty context cannot follow an introduction phrase, so the two
    /// never conflict.
    pub fn classify(&self, text: &str) -> TextContext {
        let trimmed = utils::normalize(text);
        if self.ends_with_intro(&trimmed) {
            return TextContext::NameExpected;
        }
        if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
            return TextContext::SentenceStart;
        }
        TextContext::MidSentence
    }

    fn ends_with_intro(&self, trimmed: &str) -> bool {
        let folded = trimmed.to_lowercase();
        let stripped: &str = &TRAILING_NOISE.replace(&folded, "");
        self.intro_phrases.iter().any(|phrase| {
            stripped.ends_with(phrase.as_str())
                && match stripped.len() - phrase.len() {
                    0 => true,
                    at => stripped[..at].ends_with(char::is_whitespace),
                }
        })
    }
}
