//! Engine-level configuration extending the core `Config`.
//!
//! All generic tunables come from `libgroupkey_core::Config` (flattened
//! via serde); this layer adds what only the frontend knows about: which
//! layout preset to use and how to reach the oracle endpoint.

use serde::{Deserialize, Serialize};

use crate::layouts::LayoutPreset;
use libgroupkey_core::Layout;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupKeyConfig {
    /// Base configuration fields (limits, temperatures, rate window, …)
    #[serde(flatten)]
    pub base: libgroupkey_core::Config,

    /// Layout preset name: "alphabetic4", "frequency4" or "frequency6"
    pub layout: String,

    /// Prediction endpoint URL; `None` runs the engine offline
    pub oracle_endpoint: Option<String>,

    /// Per-request oracle timeout in milliseconds
    pub oracle_timeout_ms: u64,

    /// Whether the oracle is consulted at all
    pub oracle_enabled: bool,
}

impl Default for GroupKeyConfig {
    fn default() -> Self {
        Self {
            base: libgroupkey_core::Config::default(),
            layout: LayoutPreset::FrequencyFour.name().to_string(),
            oracle_endpoint: None,
            oracle_timeout_ms: 2_000,
            oracle_enabled: false,
        }
    }
}

impl GroupKeyConfig {
    /// Convert into the base config for use with core constructors.
    pub fn into_base(self) -> libgroupkey_core::Config {
        self.base
    }

    /// Get a reference to the base config.
    pub fn base(&self) -> &libgroupkey_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config.
    pub fn base_mut(&mut self) -> &mut libgroupkey_core::Config {
        &mut self.base
    }

    /// The configured layout preset, falling back to the default preset
    /// for unknown names.
    pub fn layout_preset(&self) -> LayoutPreset {
        LayoutPreset::from_name(&self.layout).unwrap_or(LayoutPreset::FrequencyFour)
    }

    /// Build the configured layout.
    pub fn layout(&self) -> Layout {
        self.layout_preset().layout()
    }
}
