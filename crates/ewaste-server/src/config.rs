//! Server configuration

use ewaste_classifiers::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// AI provider and orchestrator settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Shared key for admin mutations. Admin routes are open when unset.
    #[serde(default, skip_serializing)]
    pub admin_api_key: Option<String>,

    /// Load the seed hazards and centers at start-up
    #[serde(default = "default_true")]
    pub seed_data: bool,

    /// Maximum accepted request body size
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub admin_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_key) = &overrides.api_key {
            self.classifier.api_key = Some(api_key.clone());
        }

        if let Some(admin_key) = &overrides.admin_key {
            self.admin_api_key = Some(admin_key.clone());
        }

        if let Some(model) = &overrides.model {
            self.classifier.model = model.clone();
        }

        if let Some(base_url) = &overrides.base_url {
            self.classifier.base_url = base_url.clone();
        }
    }

    /// Configured admin key, ignoring blank values
    pub fn admin_key(&self) -> Option<&str> {
        self.admin_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            admin_api_key: None,
            seed_data: true,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}
