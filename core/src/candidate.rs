//! Candidate types for group-key word prediction.
//!
//! This module provides:
//! - `Provenance`: where a candidate came from
//! - `Candidate`: a single word with provenance and validation status
//! - `PredictionResult`: the ranked, deduplicated value returned to callers

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Where a candidate word was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Oracle `top_predictions` entry
    OracleTop,
    /// Oracle `alternative_words` entry
    OracleAlt,
    /// Name dictionary match blended in for name-expecting context
    Name,
    /// Next-word suggestion blended in at a sentence start
    SentenceStart,
    /// Deterministic fallback table match
    Fallback,
}

/// A single candidate word.
///
/// Candidates are produced fresh per prediction call and collapsed into a
/// `PredictionResult` before leaving the predictor; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub provenance: Provenance,
    pub validated: bool,
}

impl Candidate {
    pub fn new<T: Into<String>>(word: T, provenance: Provenance, validated: bool) -> Self {
        Self {
            word: word.into(),
            provenance,
            validated,
        }
    }
}

/// Ranked prediction outcome.
///
/// Invariants:
/// - when `validation_failed` is false, every word in both lists is
///   letter-for-letter consistent with the sequence that triggered the
///   prediction;
/// - no word appears twice across `top_predictions` and
///   `alternative_words` (construction dedups, first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub top_predictions: Vec<String>,
    pub alternative_words: Vec<String>,
    pub confidence: f32,
    pub validation_failed: bool,
}

impl PredictionResult {
    /// The empty result: both lists empty, confidence 0. This is the
    /// "no candidates" value — it is not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top_predictions.is_empty() && self.alternative_words.is_empty()
    }

    /// Build a result from ranked words: dedup by exact word keeping the
    /// first occurrence, then split into the first `max_top` top
    /// predictions and the next `max_alt` alternatives.
    pub fn from_ranked<I, S>(
        words: I,
        max_top: usize,
        max_alt: usize,
        confidence: f32,
        validation_failed: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if seen.insert(word.clone()) {
                unique.push(word);
            }
            if unique.len() >= max_top + max_alt {
                break;
            }
        }

        let alternative_words = unique.split_off(unique.len().min(max_top));
        Self {
            top_predictions: unique,
            alternative_words,
            confidence,
            validation_failed,
        }
    }

    /// All returned words in rank order, top predictions first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.top_predictions
            .iter()
            .chain(self.alternative_words.iter())
            .map(String::as_str)
    }
}
