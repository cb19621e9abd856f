//! Game configuration.
//!
//! The engine is configured at startup with:
//! - `Timings`: resolution delays for matches, mismatches and victory
//! - `FactsConfig`: the optional fun-fact collaborator
//! - `GameConfig`: combines the above with an optional deal seed
//!
//! Every field has a default, so partial TOML files are accepted:
//!
//! ```
//! use magic_memory::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("seed = 9\n[timings]\nmismatch_delay_ms = 1000\n").unwrap();
//! assert_eq!(config.seed, Some(9));
//! assert_eq!(config.timings.mismatch_delay_ms, 1000);
//! assert_eq!(config.timings.match_delay_ms, 200);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Resolution delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between the second flip of a matching pair and marking it matched.
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair turns face-down again.
    pub mismatch_delay_ms: u64,

    /// Delay between clearing the board and announcing victory.
    pub victory_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            match_delay_ms: 200,
            mismatch_delay_ms: 600,
            victory_delay_ms: 400,
        }
    }
}

impl Timings {
    /// Zero delays; every resolution happens on the next `advance`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            match_delay_ms: 0,
            mismatch_delay_ms: 0,
            victory_delay_ms: 0,
        }
    }

    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn victory_delay(&self) -> Duration {
        Duration::from_millis(self.victory_delay_ms)
    }
}

/// Settings for the fun-fact client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// Whether to call the remote service at all.
    pub enabled: bool,

    /// API key sent with each request.
    pub api_key: Option<String>,

    /// Model name used in the request path.
    pub model: String,

    /// Service base URL (no trailing slash).
    pub base_url: String,

    /// Request timeout.
    pub timeout_ms: u64,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 5000,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Resolution delays.
    pub timings: Timings,

    /// Fixed deal seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Fun-fact client settings.
    pub facts: FactsConfig,
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the resolution delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Replace the fun-fact settings.
    #[must_use]
    pub fn with_facts(mut self, facts: FactsConfig) -> Self {
        self.facts = facts;
        self
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `GameError::Config` if the TOML is invalid.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| GameError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
