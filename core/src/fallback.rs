//! Deterministic fallback word table.
//!
//! The fallback tier answers when the oracle is unavailable or produced
//! nothing usable. The table is built once at startup: every word in the
//! corpus is mapped to its exact button sequence under the injected
//! layout and filed by length. Lookup is exact sequence equality — two
//! words of equal length with different sequences never cross-match —
//! which makes this the tier tests and offline operation rely on.

use std::collections::BTreeMap;

use crate::candidate::PredictionResult;
use crate::layout::Layout;

/// Length-keyed table of (word, sequence) pairs with exact-match lookup.
#[derive(Debug, Clone)]
pub struct FallbackMatcher {
    /// BTreeMap keeps cross-length iteration (worked examples) stable.
    by_len: BTreeMap<usize, Vec<(String, Vec<u8>)>>,
    max_top: usize,
    max_alt: usize,
    confidence: f32,
}

impl FallbackMatcher {
    /// Build the table from a word corpus. Words containing letters
    /// outside the layout alphabet are skipped; within a length bucket,
    /// corpus order is preserved and duplicates keep their first slot.
    pub fn from_words<I, S>(
        words: I,
        layout: &Layout,
        max_top: usize,
        max_alt: usize,
        confidence: f32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_len: BTreeMap<usize, Vec<(String, Vec<u8>)>> = BTreeMap::new();
        for word in words {
            let word = word.as_ref().to_ascii_uppercase();
            let Some(sequence) = layout.sequence_for(&word) else {
                continue;
            };
            let bucket = by_len.entry(sequence.len()).or_default();
            if bucket.iter().any(|(w, _)| *w == word) {
                continue;
            }
            bucket.push((word, sequence));
        }
        Self {
            by_len,
            max_top,
            max_alt,
            confidence,
        }
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.by_len.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_len.is_empty()
    }

    /// Exact-sequence lookup. Matches come back in table insertion
    /// order: first `max_top` as top predictions, next `max_alt` as
    /// alternatives, confidence as configured. No entry for the length
    /// or no equal sequence yields the empty result (confidence 0).
    pub fn lookup(&self, sequence: &[u8]) -> PredictionResult {
        let Some(bucket) = self.by_len.get(&sequence.len()) else {
            return PredictionResult::empty();
        };
        let matches: Vec<&str> = bucket
            .iter()
            .filter(|(_, stored)| stored == sequence)
            .map(|(word, _)| word.as_str())
            .collect();
        if matches.is_empty() {
            return PredictionResult::empty();
        }
        PredictionResult::from_ranked(matches, self.max_top, self.max_alt, self.confidence, false)
    }

    /// The first `n` (word, sequence) pairs across the table, shortest
    /// words first — used as worked examples in oracle prompts.
    pub fn examples(&self, n: usize) -> Vec<(&str, &[u8])> {
        self.by_len
            .values()
            .flatten()
            .take(n)
            .map(|(word, seq)| (word.as_str(), seq.as_slice()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabetic() -> Layout {
        Layout::new([
            (1u8, "ABCDEFG"),
            (2u8, "HIJKLM"),
            (3u8, "NOPQRS"),
            (4u8, "TUVWXYZ"),
        ])
        .unwrap()
    }

    fn matcher(layout: &Layout) -> FallbackMatcher {
        FallbackMatcher::from_words(
            ["THE", "AND", "ARE", "TIE", "TOE", "A", "I", "HELLO"],
            layout,
            3,
            5,
            0.65,
        )
    }

    #[test]
    fn finds_the_for_its_exact_sequence() {
        let layout = alphabetic();
        let m = matcher(&layout);
        // T=4, H=2, E=1
        let result = m.lookup(&[4, 2, 1]);
        assert!(result.top_predictions.contains(&"THE".to_string()));
        assert_eq!(result.confidence, 0.65);
        assert!(!result.validation_failed);
    }

    #[test]
    fn finds_and_for_its_exact_sequence() {
        let layout = alphabetic();
        let m = matcher(&layout);
        // A=1, N=3, D=1 — ARE (A=1, R=3, E=1) shares the sequence.
        let result = m.lookup(&[1, 3, 1]);
        assert!(result.top_predictions.contains(&"AND".to_string()));
        assert!(result.top_predictions.contains(&"ARE".to_string()));
    }

    #[test]
    fn same_length_different_sequence_never_matches() {
        let layout = alphabetic();
        let m = matcher(&layout);
        let result = m.lookup(&[4, 2, 2]);
        assert!(!result.words().any(|w| w == "THE"));
    }

    #[test]
    fn unknown_length_yields_empty_result() {
        let layout = alphabetic();
        let m = matcher(&layout);
        let result = m.lookup(&[1, 1, 1, 1, 1, 1, 1]);
        assert!(result.is_empty());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn lookup_is_deterministic() {
        let layout = alphabetic();
        let m = matcher(&layout);
        assert_eq!(m.lookup(&[1, 3, 1]), m.lookup(&[1, 3, 1]));
    }

    #[test]
    fn words_outside_alphabet_are_skipped() {
        let layout = alphabetic();
        let m = FallbackMatcher::from_words(["CAFÉ", "CAFE"], &layout, 3, 5, 0.65);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn examples_start_with_shortest_entries() {
        let layout = alphabetic();
        let m = matcher(&layout);
        let examples = m.examples(2);
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].0, "A");
        assert_eq!(examples[0].1, &[1u8][..]);
    }
}
