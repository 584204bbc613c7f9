//! libgroupkey-core
//!
//! Decoding, validation, disambiguation and merge engine for group-key
//! text entry: a reduced-key device where each button stands for a group
//! of letters and a button sequence must be resolved into ranked
//! candidate words.
//!
//! The crate is generic over the prediction oracle (`WordOracle` /
//! `NextWordOracle` traits); concrete transports, layout presets and
//! dictionaries live in the `libgroupkey` frontend crate.
//!
//! Public API:
//! - `Layout` - button-id → letter-group configuration
//! - `word_matches_sequence` - the hard validation constraint
//! - `PredictionResult` - ranked, deduplicated candidate lists
//! - `NameDictionary` / `FallbackMatcher` - deterministic lookup services
//! - `ContextClassifier` - typed-text context classification
//! - `Predictor` - tiered oracle client and merge engine
//! - `TypingEngine` / `TypingSession` - session state machine
//! - `RateLimiter` - shared sliding-window admission control
//! - `Config` - engine tunables with TOML load/save

use serde::{Deserialize, Serialize};

pub mod layout;
pub use layout::Layout;

pub mod validator;
pub use validator::word_matches_sequence;

pub mod candidate;
pub use candidate::{Candidate, PredictionResult, Provenance};

pub mod names;
pub use names::NameDictionary;

pub mod fallback;
pub use fallback::FallbackMatcher;

pub mod context;
pub use context::{ContextClassifier, TextContext};

pub mod oracle;
pub use oracle::{NextWordOracle, OracleError, OracleResponse, WordOracle};

pub mod prompt;

pub mod predictor;
pub use predictor::{Predictor, Tier, TIERS};

pub mod session;
pub use session::{words_per_minute, SessionSnapshot, SessionState, TypingSession};

pub mod typing;
pub use typing::{InputEvent, SessionError, TypingEngine};

pub mod ratelimit;
pub use ratelimit::{RateLimiter, SharedRateLimiter};

/// Engine tunables shared by every component.
///
/// Frontend crates flatten this into their own configuration and add
/// transport-specific fields (endpoint, timeouts, layout choice).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Introduction phrases that make the classifier expect a name next
    pub intro_phrases: Vec<String>,

    /// Maximum `top_predictions` entries per result
    pub max_top_predictions: usize,
    /// Maximum `alternative_words` entries per result
    pub max_alternatives: usize,
    /// Maximum next-word suggestions kept per refresh
    pub max_next_words: usize,

    /// Oracle sampling temperature for the first, precise attempt
    pub precise_temperature: f32,
    /// Slightly higher temperature for the corrective retry
    pub retry_temperature: f32,

    /// Confidence reported by the deterministic fallback tier
    pub fallback_confidence: f32,
    /// Confidence attached to unvalidated (flagged) output
    pub unvalidated_confidence: f32,

    /// Worked examples embedded in oracle prompts
    pub prompt_examples: usize,

    /// Entries kept in the (sequence, context) → result cache
    pub max_cache_size: usize,

    /// Requests admitted per session within one rate window
    pub rate_limit_max_requests: usize,
    /// Rate window length in seconds
    pub rate_limit_window_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intro_phrases: vec![
                "my name is".to_string(),
                "i am".to_string(),
                "i'm".to_string(),
                "name is".to_string(),
            ],
            max_top_predictions: 3,
            max_alternatives: 5,
            max_next_words: 3,
            precise_temperature: 0.3,
            retry_temperature: 0.5,
            fallback_confidence: 0.65,
            unvalidated_confidence: 0.1,
            prompt_examples: 2,
            // 256 cached predictions covers a typing session comfortably
            max_cache_size: 256,
            rate_limit_max_requests: 10,
            rate_limit_window_secs: 1.0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The rate window as a `Duration`.
    pub fn rate_limit_window(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.rate_limit_window_secs)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
