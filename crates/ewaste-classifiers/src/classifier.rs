//! Classifier trait and common types

use async_trait::async_trait;
use ewaste_core::{ClassificationResult, DeviceSubmission, Result};

/// Trait for all hazard classifiers
#[async_trait]
pub trait HazardClassifier: Send + Sync {
    /// Classify the given device
    async fn classify(&self, device: &DeviceSubmission) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the tier (where the work happens)
    fn tier(&self) -> ClassifierTier;
}

/// Classifier execution tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierTier {
    /// In-process string heuristics, no I/O, cannot fail
    Local,
    /// Calls an external provider and may fail or time out
    Remote,
}

impl ClassifierTier {
    /// Whether a failure from this tier is expected and must be absorbed
    pub fn may_fail(&self) -> bool {
        matches!(self, Self::Remote)
    }
}
