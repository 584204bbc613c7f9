//! High-level engine factories.
//!
//! These wire the core pieces — layout, dictionaries, classifier,
//! predictor, typing session — into a ready `TypingEngine` so embedders
//! only choose a configuration and an oracle.

use libgroupkey_core::{
    ContextClassifier, FallbackMatcher, NextWordOracle, Predictor, TypingEngine, WordOracle,
};

use crate::config::GroupKeyConfig;
use crate::oracle::{HttpOracle, NullOracle};
use crate::wordlists;

/// Build a typing engine from the configuration and an explicit oracle.
///
/// The fallback table is derived from the built-in common-word corpus
/// under the configured layout; the name dictionary is the built-in
/// census set.
pub fn engine_with_oracle<O>(config: &GroupKeyConfig, oracle: O) -> TypingEngine<O>
where
    O: WordOracle + NextWordOracle,
{
    let layout = config.layout();
    let base = config.base().clone();
    let fallback = FallbackMatcher::from_words(
        wordlists::common_words().iter().copied(),
        &layout,
        base.max_top_predictions,
        base.max_alternatives,
        base.fallback_confidence,
    );
    let classifier = ContextClassifier::new(&base.intro_phrases);
    let predictor = Predictor::new(
        oracle,
        layout,
        wordlists::builtin_names().clone(),
        fallback,
        classifier,
        base,
    );
    TypingEngine::new(predictor)
}

/// Fully deterministic engine: no oracle, predictions come from the
/// name dictionary and the fallback table only.
pub fn offline_engine(config: &GroupKeyConfig) -> TypingEngine<NullOracle> {
    engine_with_oracle(config, NullOracle)
}

/// Engine over the configured HTTP oracle endpoint. Without an endpoint,
/// or with the oracle disabled, the result behaves like `offline_engine`.
pub fn online_engine(config: &GroupKeyConfig) -> TypingEngine<HttpOracle> {
    let mut oracle = match &config.oracle_endpoint {
        Some(endpoint) => HttpOracle::new(endpoint.clone()),
        None => HttpOracle::new(String::new()),
    };
    oracle.set_timeout(config.oracle_timeout_ms);
    oracle.set_enabled(config.oracle_enabled && config.oracle_endpoint.is_some());
    engine_with_oracle(config, oracle)
}
