//! Oracle capability seam.
//!
//! The external prediction service is non-deterministic and fallible, so
//! the engine depends on it by contract only: two narrow traits the
//! frontend (or a test double) implements. Everything the predictor needs
//! from a response is already structured here; transport and wire format
//! are the implementor's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured oracle reply. All fields are serde-defaulted so a partial
/// payload parses as "fewer candidates" rather than an error; a missing
/// confidence reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleResponse {
    #[serde(default)]
    pub top_predictions: Vec<String>,
    #[serde(default)]
    pub alternative_words: Vec<String>,
    #[serde(default)]
    pub confidence: f32,
}

impl OracleResponse {
    pub fn is_empty(&self) -> bool {
        self.top_predictions.is_empty() && self.alternative_words.is_empty()
    }
}

/// Oracle failure. Always recovered inside the predictor — it degrades
/// the prediction to a later tier and is never surfaced to the session
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Network / transport failure, including timeouts.
    Transport(String),
    /// The oracle answered but the payload could not be understood.
    Malformed(String),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::Transport(msg) => write!(f, "oracle transport failure: {}", msg),
            OracleError::Malformed(msg) => write!(f, "malformed oracle response: {}", msg),
        }
    }
}

impl std::error::Error for OracleError {}

/// Word prediction capability: given a prompt and a sampling temperature,
/// return ranked word lists.
pub trait WordOracle {
    fn query(&self, prompt: &str, temperature: f32) -> Result<OracleResponse, OracleError>;
}

/// Next-word suggestion capability. May share the underlying service with
/// `WordOracle`; returns an empty list on any failure.
pub trait NextWordOracle {
    fn suggest(&self, context: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_parses_with_defaults() {
        let resp: OracleResponse =
            serde_json::from_str(r#"{"top_predictions": ["THE"]}"#).unwrap();
        assert_eq!(resp.top_predictions, vec!["THE"]);
        assert!(resp.alternative_words.is_empty());
        assert_eq!(resp.confidence, 0.0);
        assert!(!resp.is_empty());
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = OracleError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
