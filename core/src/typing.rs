//! Event-driven typing engine.
//!
//! `TypingEngine` combines the predictor with a `TypingSession` and an
//! optional shared rate limiter, exposing the session operations the
//! transport layer calls. Each mutating operation passes the rate check
//! first and returns a full `SessionSnapshot`; the only caller-visible
//! failures are an unknown button id and rate-limit denial.

use std::fmt;

use crate::oracle::{NextWordOracle, WordOracle};
use crate::predictor::Predictor;
use crate::ratelimit::SharedRateLimiter;
use crate::session::{SessionSnapshot, TypingSession};

/// Session events accepted from the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Press a group button, extending the in-progress word.
    PressButton(u8),
    /// Remove the last button press.
    Backspace,
    /// Commit a word: the given one, or the current top prediction.
    AcceptWord(Option<String>),
    /// Accept the top prediction, or insert a literal space.
    AddSpace,
    /// Commit a suggested next word directly.
    AddNextWord(String),
    /// Abandon the in-progress word.
    NewWord,
    /// Reset the whole session.
    ClearAll,
}

/// Caller-visible session failures. Everything oracle-related is
/// absorbed inside the predictor and never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Button id outside the configured layout; rejected before any
    /// state change.
    InvalidButton(u8),
    /// Admission denied by the rate limiter; retryable, state unchanged.
    RateLimited,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidButton(button) => {
                write!(f, "button {} is not part of the layout", button)
            }
            SessionError::RateLimited => write!(f, "rate limit exceeded, retry later"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Typing state machine over a predictor.
///
/// The engine issues no locks of its own; one engine belongs to one
/// logical session and concurrent events against it must be serialized
/// by the caller. The rate limiter is the shared exception and is
/// internally synchronized.
pub struct TypingEngine<O> {
    predictor: Predictor<O>,
    session: TypingSession,
    limiter: Option<(SharedRateLimiter, String)>,
}

impl<O: WordOracle + NextWordOracle> TypingEngine<O> {
    pub fn new(predictor: Predictor<O>) -> Self {
        Self {
            predictor,
            session: TypingSession::new(),
            limiter: None,
        }
    }

    /// Attach a shared rate limiter under the given session key.
    pub fn with_rate_limiter(mut self, limiter: SharedRateLimiter, key: impl Into<String>) -> Self {
        self.limiter = Some((limiter, key.into()));
        self
    }

    pub fn predictor(&self) -> &Predictor<O> {
        &self.predictor
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    /// Route an event to its operation.
    pub fn process(&mut self, event: InputEvent) -> Result<SessionSnapshot, SessionError> {
        match event {
            InputEvent::PressButton(button) => self.press_button(button),
            InputEvent::Backspace => self.backspace(),
            InputEvent::AcceptWord(word) => self.accept_word(word.as_deref()),
            InputEvent::AddSpace => self.add_space(),
            InputEvent::AddNextWord(word) => self.add_next_word(&word),
            InputEvent::NewWord => self.new_word(),
            InputEvent::ClearAll => self.clear_all(),
        }
    }

    /// Append a button press and re-predict over the grown sequence.
    pub fn press_button(&mut self, button: u8) -> Result<SessionSnapshot, SessionError> {
        if !self.predictor.layout().contains(button) {
            return Err(SessionError::InvalidButton(button));
        }
        self.admit()?;
        self.session.push_button(button);
        let prediction = self
            .predictor
            .predict(self.session.sequence(), self.session.typed_text());
        self.session.set_prediction(prediction);
        Ok(self.session.snapshot())
    }

    /// Remove the last press; an emptied sequence clears predictions,
    /// otherwise the shortened sequence is re-predicted.
    pub fn backspace(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        if self.session.pop_button().is_some() {
            if self.session.sequence().is_empty() {
                self.session.clear_word();
            } else {
                let prediction = self
                    .predictor
                    .predict(self.session.sequence(), self.session.typed_text());
                self.session.set_prediction(prediction);
            }
        }
        Ok(self.session.snapshot())
    }

    /// Commit `word`, or the current top prediction when omitted. With
    /// neither, nothing changes.
    pub fn accept_word(&mut self, word: Option<&str>) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        self.accept_word_unchecked(word);
        Ok(self.session.snapshot())
    }

    /// Accept the top prediction when one exists; otherwise append a
    /// literal space to the committed text.
    pub fn add_space(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        if self.session.top_prediction().is_some() {
            self.accept_word_unchecked(None);
        } else {
            self.session.push_space();
            self.session.clear_word();
        }
        Ok(self.session.snapshot())
    }

    /// Commit a suggested next word directly, bypassing the sequence.
    pub fn add_next_word(&mut self, word: &str) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        if !word.is_empty() {
            self.session.commit_word(word);
            self.refresh_next_words();
        }
        Ok(self.session.snapshot())
    }

    /// Abandon the in-progress word; committed text is untouched.
    pub fn new_word(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        self.session.clear_word();
        Ok(self.session.snapshot())
    }

    /// Reset the whole session, including the timing baseline.
    pub fn clear_all(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.admit()?;
        self.session.reset();
        Ok(self.session.snapshot())
    }

    /// Pure read; never rate limited.
    pub fn state(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    fn accept_word_unchecked(&mut self, word: Option<&str>) {
        let word = match word {
            Some(word) if !word.is_empty() => word.to_string(),
            _ => match self.session.top_prediction() {
                Some(top) => top.to_string(),
                None => return,
            },
        };
        self.session.commit_word(&word);
        self.refresh_next_words();
    }

    fn refresh_next_words(&mut self) {
        let words = self.predictor.next_words(self.session.typed_text());
        self.session.set_next_words(words);
    }

    fn admit(&self) -> Result<(), SessionError> {
        if let Some((limiter, key)) = &self.limiter {
            if !limiter.check_and_record(key) {
                return Err(SessionError::RateLimited);
            }
        }
        Ok(())
    }
}
