//! HTTP oracle client.
//!
//! Talks to a user-deployed prediction endpoint over a blocking `reqwest`
//! client — no async runtime needed. The oracle is optional: the engine
//! runs fully offline on its deterministic tiers, and `NullOracle` makes
//! that explicit for tests and no-network deployments.
//!
//! Expected request format, both capabilities:
//! POST to the endpoint with JSON body `{"prompt": "...", "temperature": 0.3}`
//!
//! Expected response formats:
//! - word prediction: `{"top_predictions": ["THE"], "alternative_words":
//!   ["TIE"], "confidence": 0.85}`
//! - next words: `{"next_words": ["WORLD", "THERE"]}`

use std::time::Duration;

use libgroupkey_core::{prompt, NextWordOracle, OracleError, OracleResponse, WordOracle};
use serde::Deserialize;

/// Default sampling temperature for next-word suggestion requests.
const NEXT_WORD_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Deserialize)]
struct NextWordsReply {
    #[serde(default)]
    next_words: Vec<String>,
}

/// Blocking HTTP client for a custom prediction endpoint.
pub struct HttpOracle {
    endpoint: String,
    timeout_ms: u64,
    enabled: bool,
}

impl HttpOracle {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: 2_000,
            enabled: true,
        }
    }

    /// Enable or disable the oracle without tearing it down. A disabled
    /// oracle fails every query, which degrades predictions to the
    /// deterministic tiers.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the per-request timeout in milliseconds.
    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    fn post(&self, prompt: &str, temperature: f32) -> Result<reqwest::blocking::Response, OracleError> {
        if !self.enabled {
            return Err(OracleError::Transport("oracle disabled".to_string()));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let body = serde_json::json!({
            "prompt": prompt,
            "temperature": temperature,
        });
        client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| OracleError::Transport(e.to_string()))
    }
}

impl WordOracle for HttpOracle {
    fn query(&self, prompt: &str, temperature: f32) -> Result<OracleResponse, OracleError> {
        let response = self.post(prompt, temperature)?;
        response
            .json::<OracleResponse>()
            .map_err(|e| OracleError::Malformed(e.to_string()))
    }
}

impl NextWordOracle for HttpOracle {
    /// Next-word suggestions degrade silently: any failure reads as "no
    /// suggestions".
    fn suggest(&self, context: &str) -> Vec<String> {
        let request = prompt::next_word_prompt(context);
        match self.post(&request, NEXT_WORD_TEMPERATURE) {
            Ok(response) => response
                .json::<NextWordsReply>()
                .map(|reply| reply.next_words)
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}

/// Oracle stand-in that is never available. Engines built over it are
/// fully deterministic: every prediction comes from the name dictionary
/// or the fallback table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOracle;

impl WordOracle for NullOracle {
    fn query(&self, _prompt: &str, _temperature: f32) -> Result<OracleResponse, OracleError> {
        Err(OracleError::Transport("no oracle configured".to_string()))
    }
}

impl NextWordOracle for NullOracle {
    fn suggest(&self, _context: &str) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_oracle_fails_queries() {
        let mut oracle = HttpOracle::new("http://localhost:9");
        oracle.set_enabled(false);
        assert!(!oracle.is_enabled());
        let err = oracle.query("prompt", 0.3).unwrap_err();
        assert!(matches!(err, OracleError::Transport(_)));
    }

    #[test]
    fn disabled_oracle_suggests_nothing() {
        let mut oracle = HttpOracle::new("http://localhost:9");
        oracle.set_enabled(false);
        assert!(oracle.suggest("SOME TEXT").is_empty());
    }

    #[test]
    fn null_oracle_is_never_available() {
        let oracle = NullOracle;
        assert!(oracle.query("prompt", 0.3).is_err());
        assert!(oracle.suggest("SOME TEXT").is_empty());
    }

    #[test]
    fn next_words_reply_parses_with_default() {
        let reply: NextWordsReply = serde_json::from_str("{}").unwrap();
        assert!(reply.next_words.is_empty());
        let reply: NextWordsReply =
            serde_json::from_str(r#"{"next_words": ["WORLD"]}"#).unwrap();
        assert_eq!(reply.next_words, vec!["WORLD"]);
    }
}
