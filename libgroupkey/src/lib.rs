//! libgroupkey crate root
//!
//! Group-key predictive text engine: reduced-key button sequences are
//! resolved into ranked candidate words by combining an external
//! prediction oracle with deterministic dictionary tiers.
//!
//! This crate supplies everything concrete — layout presets, built-in
//! name and word dictionaries, the HTTP oracle client, engine factories —
//! over the generic machinery in `libgroupkey-core`.
//!
//! Public API exported here:
//! - `GroupKeyConfig` from `config`
//! - `LayoutPreset` and the preset constructors from `layouts`
//! - `HttpOracle` / `NullOracle` from `oracle`
//! - `offline_engine` / `online_engine` / `engine_with_oracle` from `engine`

pub mod config;
pub mod engine;
pub mod layouts;
pub mod oracle;
pub mod wordlists;

// Re-export the core types callers interact with.
pub use libgroupkey_core::{
    words_per_minute, Candidate, Config, ContextClassifier, FallbackMatcher, InputEvent, Layout,
    NameDictionary, NextWordOracle, OracleError, OracleResponse, PredictionResult, Predictor,
    Provenance, RateLimiter, SessionError, SessionSnapshot, SessionState, SharedRateLimiter,
    TextContext, TypingEngine, TypingSession, WordOracle,
};

// Convenience re-exports for common frontend types.
pub use config::GroupKeyConfig;
pub use engine::{engine_with_oracle, offline_engine, online_engine};
pub use layouts::{alphabetic_four, frequency_four, frequency_six, LayoutPreset};
pub use oracle::{HttpOracle, NullOracle};
