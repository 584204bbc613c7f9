//! Prediction policy: oracle attempts, validation, context blending and
//! tiered degradation.
//!
//! `Predictor` is generic over the oracle capability the way the generic
//! engine is elsewhere in this workspace: the linguistic intelligence is
//! injected, the policy around it is fixed. The policy is an explicit
//! ordered tier list — first tier to produce candidates wins:
//!
//! 1. oracle at the precise temperature,
//! 2. oracle retry with a corrective instruction at a higher temperature,
//! 3. context-driven output alone (names / sentence-start suggestions),
//! 4. deterministic fallback table,
//! 5. raw unvalidated oracle output, clearly flagged.
//!
//! Oracle failures never escape this module; the only externally visible
//! failure is an empty `PredictionResult`.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, warn};

use crate::candidate::{Candidate, PredictionResult, Provenance};
use crate::context::{ContextClassifier, TextContext};
use crate::fallback::FallbackMatcher;
use crate::layout::Layout;
use crate::names::NameDictionary;
use crate::oracle::{NextWordOracle, OracleResponse, WordOracle};
use crate::prompt;
use crate::validator::word_matches_sequence;
use crate::Config;

/// One stage of the prediction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Query the oracle, validate, blend by context, dedup.
    Oracle { corrective: bool },
    /// Context-driven output alone, flagged unvalidated.
    ContextOnly,
    /// Deterministic fallback table.
    Dictionary,
    /// Raw oracle output as an absolute last resort, flagged unvalidated.
    RawUnvalidated,
}

/// Evaluation order of the prediction policy.
pub const TIERS: [Tier; 5] = [
    Tier::Oracle { corrective: false },
    Tier::Oracle { corrective: true },
    Tier::ContextOnly,
    Tier::Dictionary,
    Tier::RawUnvalidated,
];

/// Oracle client and candidate merge engine.
///
/// Owns the layout, dictionaries and classifier, plus an LRU cache of
/// successful predictions keyed by (sequence, context). The cache only
/// stores non-empty, fully validated results so degraded answers are
/// retried on the next identical request.
pub struct Predictor<O> {
    oracle: O,
    layout: Layout,
    names: NameDictionary,
    fallback: FallbackMatcher,
    classifier: ContextClassifier,
    config: Config,
    cache: RefCell<LruCache<String, PredictionResult>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl<O: WordOracle + NextWordOracle> Predictor<O> {
    pub fn new(
        oracle: O,
        layout: Layout,
        names: NameDictionary,
        fallback: FallbackMatcher,
        classifier: ContextClassifier,
        config: Config,
    ) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(256).expect("256 is non-zero"));
        Self {
            oracle,
            layout,
            names,
            fallback,
            classifier,
            config,
            cache: RefCell::new(LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// (hits, misses) counters for the prediction cache.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Resolve a button sequence plus typed-text context into a ranked,
    /// deduplicated candidate list by walking the tier list.
    pub fn predict(&self, sequence: &[u8], context: &str) -> PredictionResult {
        if sequence.is_empty() {
            return PredictionResult::empty();
        }

        let key = cache_key(sequence, context);
        if let Some(cached) = self.cache.borrow_mut().get(&key) {
            *self.cache_hits.borrow_mut() += 1;
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let position = self.classifier.classify(context);
        let mut raw: Option<OracleResponse> = None;
        let mut result = PredictionResult::empty();
        for tier in TIERS {
            if let Some(found) = self.run_tier(tier, sequence, context, position, &mut raw) {
                debug!(?tier, "prediction tier produced candidates");
                result = found;
                break;
            }
        }

        if !result.is_empty() && !result.validation_failed {
            self.cache.borrow_mut().put(key, result.clone());
        }
        result
    }

    /// Next-word suggestions for the committed text, empty for blank
    /// context and truncated to the configured limit.
    pub fn next_words(&self, context: &str) -> Vec<String> {
        if context.trim().is_empty() {
            return Vec::new();
        }
        let mut words = self.oracle.suggest(context);
        words.truncate(self.config.max_next_words);
        words
    }

    fn run_tier(
        &self,
        tier: Tier,
        sequence: &[u8],
        context: &str,
        position: TextContext,
        raw: &mut Option<OracleResponse>,
    ) -> Option<PredictionResult> {
        match tier {
            Tier::Oracle { corrective } => {
                self.oracle_attempt(sequence, context, position, corrective, raw)
            }
            Tier::ContextOnly => self.context_only(sequence, context, position),
            Tier::Dictionary => {
                let result = self.fallback.lookup(sequence);
                (!result.is_empty()).then_some(result)
            }
            Tier::RawUnvalidated => self.raw_unvalidated(raw.as_ref()),
        }
    }

    /// One oracle round: query, validate, blend by context, dedup.
    fn oracle_attempt(
        &self,
        sequence: &[u8],
        context: &str,
        position: TextContext,
        corrective: bool,
        raw: &mut Option<OracleResponse>,
    ) -> Option<PredictionResult> {
        let examples = self.fallback.examples(self.config.prompt_examples);
        let request = prompt::word_prompt(&self.layout, sequence, context, &examples, corrective);
        let temperature = if corrective {
            self.config.retry_temperature
        } else {
            self.config.precise_temperature
        };

        let response = match self.oracle.query(&request, temperature) {
            Ok(response) => response,
            Err(err) => {
                // Recovered here: a dead oracle degrades, it never fails
                // the prediction.
                warn!(corrective, "oracle query failed: {}", err);
                OracleResponse::default()
            }
        };

        let mut ranked: Vec<Candidate> = Vec::new();
        self.blend_context(&mut ranked, sequence, context, position);

        let lists = [
            (&response.top_predictions, Provenance::OracleTop),
            (&response.alternative_words, Provenance::OracleAlt),
        ];
        for (list, provenance) in lists {
            for word in list {
                let word = word.to_ascii_uppercase();
                if word_matches_sequence(&word, sequence, &self.layout) {
                    ranked.push(Candidate::new(word, provenance, true));
                } else {
                    debug!(word = %word, corrective, "oracle candidate rejected by validator");
                }
            }
        }

        let confidence = response.confidence;
        if raw.is_none() && !response.is_empty() {
            *raw = Some(response);
        }

        if ranked.is_empty() {
            return None;
        }
        Some(PredictionResult::from_ranked(
            ranked.into_iter().map(|c| c.word),
            self.config.max_top_predictions,
            self.config.max_alternatives,
            confidence,
            false,
        ))
    }

    /// Prepend context-driven candidates ahead of oracle output. Name and
    /// sentence-start candidates are sequence-consistent by construction
    /// or filtering, so they never weaken the validity invariant.
    fn blend_context(
        &self,
        ranked: &mut Vec<Candidate>,
        sequence: &[u8],
        context: &str,
        position: TextContext,
    ) {
        match position {
            TextContext::NameExpected => {
                for name in self.names.find_matches(sequence, &self.layout) {
                    ranked.push(Candidate::new(name, Provenance::Name, true));
                }
            }
            TextContext::SentenceStart => {
                for word in self.sentence_start_words(sequence, context) {
                    ranked.push(Candidate::new(word, Provenance::SentenceStart, true));
                }
            }
            TextContext::MidSentence => {}
        }
    }

    /// Next-word suggestions that also satisfy the pressed sequence.
    fn sentence_start_words(&self, sequence: &[u8], context: &str) -> Vec<String> {
        self.oracle
            .suggest(context)
            .into_iter()
            .map(|w| w.to_ascii_uppercase())
            .filter(|w| word_matches_sequence(w, sequence, &self.layout))
            .collect()
    }

    /// Context priority once both oracle rounds are dry: unvalidated but
    /// relevant output beats nothing at all.
    fn context_only(
        &self,
        sequence: &[u8],
        context: &str,
        position: TextContext,
    ) -> Option<PredictionResult> {
        let words = match position {
            TextContext::NameExpected => self.names.find_matches(sequence, &self.layout),
            TextContext::SentenceStart => self.sentence_start_words(sequence, context),
            TextContext::MidSentence => return None,
        };
        if words.is_empty() {
            return None;
        }
        Some(PredictionResult::from_ranked(
            words,
            self.config.max_top_predictions,
            self.config.max_alternatives,
            self.config.unvalidated_confidence,
            true,
        ))
    }

    fn raw_unvalidated(&self, raw: Option<&OracleResponse>) -> Option<PredictionResult> {
        let response = raw?;
        let words = response
            .top_predictions
            .iter()
            .chain(response.alternative_words.iter())
            .map(|w| w.to_ascii_uppercase());
        let result = PredictionResult::from_ranked(
            words,
            self.config.max_top_predictions,
            self.config.max_alternatives,
            self.config.unvalidated_confidence,
            true,
        );
        (!result.is_empty()).then_some(result)
    }
}

fn cache_key(sequence: &[u8], context: &str) -> String {
    let seq: Vec<String> = sequence.iter().map(|b| b.to_string()).collect();
    format!("{}|{}", seq.join(","), context)
}
