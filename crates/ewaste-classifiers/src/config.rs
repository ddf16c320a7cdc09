//! Configuration for AI-backed classification

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the AI provider and the orchestrator deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Model requested from the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. A tuning knob, not a correctness requirement.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Deadline for a single provider call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider API key. Without one the AI path is disabled.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl ClassifierConfig {
    /// Orchestrator deadline for the AI path
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether a usable API key is configured
    pub fn ai_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
