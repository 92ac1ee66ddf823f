//! Generation settings value object
//!
//! The sampling parameters sent with every story request that the prompt
//! composer does not compute. Temperature is not here: it comes from the
//! request's creativity level.

use serde::{Deserialize, Serialize};

/// Fixed sampling parameters for the text-generation API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Nucleus sampling cutoff, kept high for diverse prose
    pub top_p: f32,
    /// Discourages repeated phrases
    pub frequency_penalty: f32,
    /// Encourages new topics
    pub presence_penalty: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 3000,
            top_p: 0.95,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
        }
    }
}

impl GenerationSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_tokens: env_or("STORYCRAFT_MAX_TOKENS", defaults.max_tokens),
            top_p: env_or("STORYCRAFT_TOP_P", defaults.top_p),
            frequency_penalty: env_or("STORYCRAFT_FREQUENCY_PENALTY", defaults.frequency_penalty),
            presence_penalty: env_or("STORYCRAFT_PRESENCE_PENALTY", defaults.presence_penalty),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
