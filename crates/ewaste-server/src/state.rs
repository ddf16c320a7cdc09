//! Application state shared across requests

use anyhow::Result;
use ewaste_classifiers::{AiClassifier, ClassificationOrchestrator, KeywordClassifier};
use ewaste_core::{OpenAiProvider, OpenAiSettings};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::seed;
use crate::store::{DocumentStore, InMemoryStore};

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// AI-with-fallback classification entry point
    pub orchestrator: ClassificationOrchestrator,

    /// Knowledge base lookup for the heuristic endpoint and stored profiles
    pub keyword_classifier: Arc<KeywordClassifier>,

    /// Device, hazard, and center persistence
    pub store: Arc<dyn DocumentStore>,

    /// Prometheus metrics handle for rendering, absent in tests
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Initialize application state from configuration
    pub async fn new(config: ServerConfig, metrics_handle: Option<PrometheusHandle>) -> Result<Self> {
        info!("Initializing application state");

        let orchestrator = Self::build_orchestrator(&config)?;
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());

        if config.seed_data {
            seed::seed_store(store.as_ref()).await?;
        }

        if config.admin_key().is_none() {
            warn!("No admin key configured; admin routes are unprotected");
        }

        Self::from_parts(config, orchestrator, store, metrics_handle)
    }

    /// Assemble state from prebuilt components
    pub fn from_parts(
        config: ServerConfig,
        orchestrator: ClassificationOrchestrator,
        store: Arc<dyn DocumentStore>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            orchestrator,
            keyword_classifier: Arc::new(KeywordClassifier::new()?),
            store,
            metrics_handle,
        })
    }

    fn build_orchestrator(config: &ServerConfig) -> Result<ClassificationOrchestrator> {
        let classifier_config = &config.classifier;

        let api_key = classifier_config
            .api_key
            .as_deref()
            .filter(|_| classifier_config.ai_enabled());
        let Some(api_key) = api_key else {
            warn!("No AI provider key configured; all classifications use the heuristic fallback");
            return Ok(ClassificationOrchestrator::fallback_only());
        };

        let settings = OpenAiSettings::new(api_key)
            .with_base_url(classifier_config.base_url.clone())
            .with_timeout(classifier_config.deadline() * 2);
        let provider = Arc::new(OpenAiProvider::new(settings)?);

        info!(
            "AI classification enabled: model {} via {}, deadline {:?}",
            classifier_config.model,
            provider.endpoint(),
            classifier_config.deadline()
        );

        let ai = AiClassifier::new(provider, classifier_config);
        Ok(ClassificationOrchestrator::new(Arc::new(ai), classifier_config.deadline()))
    }
}
