//! Typing session state.
//!
//! `TypingSession` is a plain state container: the in-progress button
//! sequence, the committed text, counters and timing, plus the last
//! prediction and next-word suggestions. The event logic that drives it
//! lives in `typing::TypingEngine`; keeping the two apart mirrors the
//! session/engine split used throughout this workspace.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::candidate::PredictionResult;

/// Whether a word is currently being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Empty button sequence.
    Idle,
    /// Non-empty button sequence.
    Composing,
}

/// Mutable per-session typing state. Owned exclusively by one logical
/// session; callers serialize access.
#[derive(Debug, Clone)]
pub struct TypingSession {
    sequence: Vec<u8>,
    typed_text: String,
    word_count: u64,
    start_time: Instant,
    last_prediction: PredictionResult,
    next_words: Vec<String>,
}

impl TypingSession {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            typed_text: String::new(),
            word_count: 0,
            start_time: Instant::now(),
            last_prediction: PredictionResult::empty(),
            next_words: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.sequence.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Composing
        }
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    pub fn last_prediction(&self) -> &PredictionResult {
        &self.last_prediction
    }

    pub fn next_words(&self) -> &[String] {
        &self.next_words
    }

    /// First current top prediction, if any.
    pub fn top_prediction(&self) -> Option<&str> {
        self.last_prediction
            .top_predictions
            .first()
            .map(String::as_str)
    }

    pub fn push_button(&mut self, button: u8) {
        self.sequence.push(button);
    }

    pub fn pop_button(&mut self) -> Option<u8> {
        self.sequence.pop()
    }

    pub fn set_prediction(&mut self, prediction: PredictionResult) {
        self.last_prediction = prediction;
    }

    pub fn set_next_words(&mut self, words: Vec<String>) {
        self.next_words = words;
    }

    /// Drop the in-progress word: sequence, prediction and next-word
    /// suggestions. Committed text is untouched.
    pub fn clear_word(&mut self) {
        self.sequence.clear();
        self.last_prediction = PredictionResult::empty();
        self.next_words.clear();
    }

    /// Commit a word: space-join it onto the typed text, clear the
    /// sequence and prediction, bump the word count.
    pub fn commit_word(&mut self, word: &str) {
        if !self.typed_text.is_empty() {
            self.typed_text.push(' ');
        }
        self.typed_text.push_str(word);
        self.sequence.clear();
        self.last_prediction = PredictionResult::empty();
        self.word_count += 1;
    }

    /// Append a literal space. Only meaningful after committed text; an
    /// empty buffer stays empty so the space-joined invariant holds.
    pub fn push_space(&mut self) {
        if !self.typed_text.is_empty() {
            self.typed_text.push(' ');
        }
    }

    /// Full reset, including the timing baseline.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[cfg(test)]
    pub(crate) fn backdate_start(&mut self, by: Duration) {
        self.start_time -= by;
    }

    /// Snapshot of the full session for the transport layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        let elapsed = self.elapsed();
        SessionSnapshot {
            top_predictions: self.last_prediction.top_predictions.clone(),
            alternative_words: self.last_prediction.alternative_words.clone(),
            next_word_predictions: self.next_words.clone(),
            button_sequence: self.sequence.clone(),
            typed_text: self.typed_text.clone(),
            word_count: self.word_count,
            elapsed_secs: elapsed.as_secs_f64(),
            wpm: words_per_minute(self.word_count, elapsed),
        }
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Words per minute over the session lifetime; zero for a zero-length
/// session.
pub fn words_per_minute(word_count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        word_count as f64 / (secs / 60.0)
    } else {
        0.0
    }
}

/// Read-only view of the session returned from every operation.
///
/// Metrics are raw here; `rounded()` applies the one-decimal display
/// rounding at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub top_predictions: Vec<String>,
    pub alternative_words: Vec<String>,
    pub next_word_predictions: Vec<String>,
    pub button_sequence: Vec<u8>,
    pub typed_text: String,
    pub word_count: u64,
    pub elapsed_secs: f64,
    pub wpm: f64,
}

impl SessionSnapshot {
    /// Copy with `elapsed_secs` and `wpm` rounded to one decimal.
    pub fn rounded(mut self) -> Self {
        self.elapsed_secs = round1(self.elapsed_secs);
        self.wpm = round1(self.wpm);
        self
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let s = TypingSession::new();
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.typed_text(), "");
        assert_eq!(s.word_count(), 0);
        assert!(s.last_prediction().is_empty());
    }

    #[test]
    fn pushing_buttons_composes() {
        let mut s = TypingSession::new();
        s.push_button(4);
        s.push_button(2);
        assert_eq!(s.state(), SessionState::Composing);
        assert_eq!(s.sequence(), &[4, 2]);
        assert_eq!(s.pop_button(), Some(2));
        assert_eq!(s.pop_button(), Some(4));
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.pop_button(), None);
    }

    #[test]
    fn commit_word_space_joins_and_counts() {
        let mut s = TypingSession::new();
        s.push_button(4);
        s.commit_word("THE");
        assert_eq!(s.typed_text(), "THE");
        assert_eq!(s.word_count(), 1);
        assert_eq!(s.state(), SessionState::Idle);

        s.commit_word("END");
        assert_eq!(s.typed_text(), "THE END");
        assert_eq!(s.word_count(), 2);
    }

    #[test]
    fn push_space_only_after_text() {
        let mut s = TypingSession::new();
        s.push_space();
        assert_eq!(s.typed_text(), "");
        s.commit_word("THE");
        s.push_space();
        assert_eq!(s.typed_text(), "THE ");
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut s = TypingSession::new();
        s.push_button(1);
        s.commit_word("A");
        s.set_next_words(vec!["B".into()]);
        s.reset();
        assert_eq!(s.typed_text(), "");
        assert_eq!(s.word_count(), 0);
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.next_words().is_empty());
    }

    #[test]
    fn wpm_formula() {
        assert_eq!(words_per_minute(0, Duration::from_secs(30)), 0.0);
        assert_eq!(words_per_minute(4, Duration::from_secs(120)), 2.0);
        assert_eq!(words_per_minute(5, Duration::ZERO), 0.0);
    }

    #[test]
    fn snapshot_reflects_session_and_rounds_at_boundary() {
        let mut s = TypingSession::new();
        s.commit_word("THE");
        s.commit_word("CAT");
        s.commit_word("SAT");
        s.commit_word("NOW");
        s.backdate_start(Duration::from_secs(120));
        let snap = s.snapshot().rounded();
        assert_eq!(snap.word_count, 4);
        assert_eq!(snap.typed_text, "THE CAT SAT NOW");
        assert_eq!(snap.wpm, 2.0);
        assert!(snap.elapsed_secs >= 120.0);
    }
}
