//! Fallback-aware classification orchestrator
//!
//! Single entry point for device classification. Tries the primary
//! (remote) classifier under a deadline and substitutes the enhanced
//! fallback on any failure, so callers always receive a result.

use crate::classifier::HazardClassifier;
use crate::fallback::FallbackClassifier;
use ewaste_core::{ClassificationResult, DeviceSubmission, Error};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Orchestrator states. Both paths end in `Fallback` or a primary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationState {
    TryAi,
    Fallback,
}

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Ai,
    Fallback,
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Fallback => "fallback",
        }
    }
}

/// A result plus how it was obtained
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub result: ClassificationResult,
    pub source: ClassificationSource,

    /// Why the primary path was abandoned, if it was
    pub fallback_reason: Option<String>,

    pub latency_us: u64,
}

/// Selects between the primary classifier and the enhanced fallback
#[derive(Clone)]
pub struct ClassificationOrchestrator {
    primary: Option<Arc<dyn HazardClassifier>>,
    fallback: Arc<FallbackClassifier>,
    deadline: Duration,
}

impl ClassificationOrchestrator {
    /// Orchestrator with a primary classifier and a deadline for it
    pub fn new(primary: Arc<dyn HazardClassifier>, deadline: Duration) -> Self {
        Self {
            primary: Some(primary),
            fallback: Arc::new(FallbackClassifier::new()),
            deadline,
        }
    }

    /// Orchestrator with no primary; every request uses the fallback
    pub fn fallback_only() -> Self {
        Self {
            primary: None,
            fallback: Arc::new(FallbackClassifier::new()),
            deadline: Duration::ZERO,
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Classify a device. Never fails.
    pub async fn classify_device(&self, name: &str, category: &str) -> ClassificationOutcome {
        let start = Instant::now();
        let device = DeviceSubmission::new(name, category);

        let mut state = ClassificationState::TryAi;
        let mut fallback_reason = None;

        loop {
            match state {
                ClassificationState::TryAi => match self.try_primary(&device).await {
                    Ok(result) => {
                        return self.finish(result, ClassificationSource::Ai, None, start);
                    }
                    Err(e) => {
                        metrics::counter!("ewaste_provider_failures_total", "kind" => e.kind())
                            .increment(1);
                        warn!(
                            "AI classification failed for {} ({}), using fallback: {}",
                            name, category, e
                        );
                        fallback_reason = Some(e.to_string());
                        state = ClassificationState::Fallback;
                    }
                },
                ClassificationState::Fallback => {
                    let result = self.fallback.classify_device(name, category);
                    return self.finish(result, ClassificationSource::Fallback, fallback_reason, start);
                }
            }
        }
    }

    async fn try_primary(&self, device: &DeviceSubmission) -> ewaste_core::Result<ClassificationResult> {
        let primary = self
            .primary
            .as_ref()
            .ok_or_else(|| Error::provider("no AI provider configured"))?;

        debug!("Trying primary classifier {}", primary.name());

        match tokio::time::timeout(self.deadline, primary.classify(device)).await {
            Ok(result) => result.map(ClassificationResult::ensure_recycling_step),
            Err(_) => Err(Error::Timeout),
        }
    }

    fn finish(
        &self,
        result: ClassificationResult,
        source: ClassificationSource,
        fallback_reason: Option<String>,
        start: Instant,
    ) -> ClassificationOutcome {
        let latency_us = start.elapsed().as_micros() as u64;

        metrics::counter!("ewaste_classifications_total", "source" => source.as_str()).increment(1);
        metrics::histogram!("ewaste_classification_latency_us", "source" => source.as_str())
            .record(latency_us as f64);

        ClassificationOutcome {
            result,
            source,
            fallback_reason,
            latency_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierTier;
    use ewaste_core::{HazardLevel, Result};

    struct Unreachable;

    #[async_trait::async_trait]
    impl HazardClassifier for Unreachable {
        async fn classify(&self, _device: &DeviceSubmission) -> Result<ClassificationResult> {
            Err(Error::provider("connection refused"))
        }

        fn name(&self) -> &str {
            "unreachable"
        }

        fn tier(&self) -> ClassifierTier {
            ClassifierTier::Remote
        }
    }

    #[tokio::test]
    async fn test_fallback_only_uses_fallback() {
        let orchestrator = ClassificationOrchestrator::fallback_only();
        let outcome = orchestrator.classify_device("iPhone 12", "E-waste").await;
        assert_eq!(outcome.source, ClassificationSource::Fallback);
        assert_eq!(outcome.result.hazard_level, HazardLevel::High);
        assert!(outcome.fallback_reason.unwrap().contains("no AI provider"));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let orchestrator =
            ClassificationOrchestrator::new(Arc::new(Unreachable), Duration::from_secs(1));
        let outcome = orchestrator.classify_device("Plastic Tray", "Plastic").await;
        assert_eq!(outcome.source, ClassificationSource::Fallback);
        assert_eq!(outcome.result.hazard_level, HazardLevel::Medium);
        assert_eq!(outcome.result.hazardous_materials.len(), 3);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(ClassificationSource::Ai.as_str(), "ai");
        assert_eq!(
            serde_json::to_value(ClassificationSource::Fallback).unwrap(),
            "fallback"
        );
    }
}
