//! Session state-machine tests: word commitment, metrics and rate
//! limiting over the deterministic offline engine.

use std::thread;
use std::time::Duration;

use libgroupkey::{
    offline_engine, GroupKeyConfig, LayoutPreset, NextWordOracle, OracleError, OracleResponse,
    RateLimiter, SessionError, WordOracle,
};

fn alphabetic_config() -> GroupKeyConfig {
    GroupKeyConfig {
        layout: LayoutPreset::AlphabeticFour.name().to_string(),
        ..Default::default()
    }
}

#[test]
fn accept_word_commits_first_top_prediction() {
    let mut engine = offline_engine(&alphabetic_config());
    for button in [4, 2, 1] {
        engine.press_button(button).unwrap();
    }
    let top = engine.state().top_predictions;
    assert_eq!(top[0], "THE");

    let snap = engine.accept_word(None).unwrap();
    assert_eq!(snap.typed_text, "THE");
    assert_eq!(snap.word_count, 1);
    assert!(snap.button_sequence.is_empty());
    assert!(snap.top_predictions.is_empty());
}

#[test]
fn accept_word_with_explicit_word_wins() {
    let mut engine = offline_engine(&alphabetic_config());
    for button in [4, 2, 1] {
        engine.press_button(button).unwrap();
    }
    let snap = engine.accept_word(Some("TIE")).unwrap();
    assert_eq!(snap.typed_text, "TIE");
    assert_eq!(snap.word_count, 1);
}

#[test]
fn words_accumulate_space_joined() {
    let mut engine = offline_engine(&alphabetic_config());
    engine.add_next_word("HELLO").unwrap();
    engine.add_next_word("THERE").unwrap();
    let snap = engine.state();
    assert_eq!(snap.typed_text, "HELLO THERE");
    assert_eq!(snap.word_count, 2);
}

#[test]
fn add_space_accepts_top_prediction_when_present() {
    let mut engine = offline_engine(&alphabetic_config());
    for button in [4, 2, 1] {
        engine.press_button(button).unwrap();
    }
    let snap = engine.add_space().unwrap();
    assert_eq!(snap.typed_text, "THE");
    assert_eq!(snap.word_count, 1);

    // No word in progress: a literal space, no word counted.
    let snap = engine.add_space().unwrap();
    assert_eq!(snap.typed_text, "THE ");
    assert_eq!(snap.word_count, 1);
}

#[test]
fn backspace_walks_the_sequence_back() {
    let mut engine = offline_engine(&alphabetic_config());
    for button in [4, 2, 1] {
        engine.press_button(button).unwrap();
    }
    assert!(!engine.state().top_predictions.is_empty());

    let snap = engine.backspace().unwrap();
    assert_eq!(snap.button_sequence, vec![4, 2]);
    let snap = engine.backspace().unwrap();
    assert_eq!(snap.button_sequence, vec![4]);
    let snap = engine.backspace().unwrap();
    assert!(snap.button_sequence.is_empty());
    assert!(snap.top_predictions.is_empty());
}

#[test]
fn clear_all_resets_metrics() {
    let mut engine = offline_engine(&alphabetic_config());
    engine.add_next_word("HELLO").unwrap();
    engine.press_button(1).unwrap();
    let snap = engine.clear_all().unwrap();
    assert_eq!(snap.typed_text, "");
    assert_eq!(snap.word_count, 0);
    assert!(snap.button_sequence.is_empty());
    assert_eq!(snap.rounded().wpm, 0.0);
}

#[test]
fn wpm_is_zero_before_any_word() {
    let engine = offline_engine(&alphabetic_config());
    assert_eq!(engine.state().wpm, 0.0);
}

#[test]
fn eleventh_rapid_request_is_rate_limited() {
    // 10 requests admitted within the 1s window, the 11th rejected with
    // state unchanged; a later request is admitted again.
    let limiter = RateLimiter::shared(10, Duration::from_secs(1));
    let mut engine =
        offline_engine(&alphabetic_config()).with_rate_limiter(limiter, "session-1");

    for i in 0..10 {
        let button = [4u8, 2, 1][i % 3];
        engine.press_button(button).unwrap();
    }
    let err = engine.press_button(4).unwrap_err();
    assert_eq!(err, SessionError::RateLimited);
    assert_eq!(engine.state().button_sequence.len(), 10);

    thread::sleep(Duration::from_millis(1_100));
    assert!(engine.press_button(4).is_ok());
    assert_eq!(engine.state().button_sequence.len(), 11);
}

#[test]
fn limiter_is_shared_but_keyed_per_session() {
    let limiter = RateLimiter::shared(1, Duration::from_secs(5));
    let mut one = offline_engine(&alphabetic_config())
        .with_rate_limiter(limiter.clone(), "session-a");
    let mut two = offline_engine(&alphabetic_config())
        .with_rate_limiter(limiter, "session-b");

    one.press_button(1).unwrap();
    assert_eq!(one.press_button(1).unwrap_err(), SessionError::RateLimited);
    // A different session is unaffected.
    two.press_button(1).unwrap();
}

#[test]
fn next_word_suggestions_follow_commits() {
    /// Oracle with no word predictions but canned next-word suggestions.
    struct SuggestOnly;

    impl WordOracle for SuggestOnly {
        fn query(&self, _prompt: &str, _temperature: f32) -> Result<OracleResponse, OracleError> {
            Err(OracleError::Transport("offline".into()))
        }
    }

    impl NextWordOracle for SuggestOnly {
        fn suggest(&self, context: &str) -> Vec<String> {
            if context.is_empty() {
                Vec::new()
            } else {
                vec!["WORLD".to_string(), "AGAIN".to_string()]
            }
        }
    }

    let mut engine = libgroupkey::engine_with_oracle(&alphabetic_config(), SuggestOnly);
    let snap = engine.add_next_word("HELLO").unwrap();
    assert_eq!(snap.next_word_predictions, vec!["WORLD", "AGAIN"]);

    // Abandoning a word clears the suggestions too.
    let snap = engine.new_word().unwrap();
    assert!(snap.next_word_predictions.is_empty());
}
