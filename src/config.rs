//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{AssistantError, Result};

pub const DEFAULT_HISTORY_LIMIT: usize = 3;
pub const DEFAULT_THINKING_DELAY_MS: u64 = 1200;
pub const DEFAULT_IMAGE_ID: &str = "assistant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many fallback replies are remembered to avoid repeating them.
    pub history_limit: usize,
    /// Delay before a computed reply is shown.
    pub thinking_delay_ms: u64,
    /// Seed for response choice; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Include the catch-all pattern in the secondary library.
    pub catch_all: bool,
    /// Image shown when a reply carries no mapped pictograph.
    pub default_image_id: String,
    /// Topics offered by the generic "ask me about" reply.
    pub fallback_topics: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
            seed: None,
            catch_all: true,
            default_image_id: DEFAULT_IMAGE_ID.to_string(),
            fallback_topics: vec![
                "our features".to_string(),
                "privacy".to_string(),
                "the message board".to_string(),
                "a joke".to_string(),
            ],
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(AssistantError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        if self.default_image_id.trim().is_empty() {
            return Err(AssistantError::Config(
                "default_image_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
