//! E-Waste Classifiers
//!
//! Hazard classification for discarded electronics.
//!
//! Classifiers are organized into tiers:
//! - Local: knowledge-base keyword lookup and the enhanced fallback
//!   templates. Pure string heuristics that never fail.
//! - Remote: AI-backed classification through a completion provider.
//!
//! The [`ClassificationOrchestrator`] ties them together and always
//! produces a result.

pub mod ai;
pub mod classifier;
pub mod compat;
pub mod config;
pub mod fallback;
pub mod keyword;
pub mod knowledge_base;
pub mod orchestrator;

pub use ai::AiClassifier;
pub use classifier::{ClassifierTier, HazardClassifier};
pub use compat::LegacyFields;
pub use config::ClassifierConfig;
pub use fallback::FallbackClassifier;
pub use keyword::{KeywordClassifier, ProfileMatch};
pub use knowledge_base::KnowledgeBaseEntry;
pub use orchestrator::{
    ClassificationOrchestrator, ClassificationOutcome, ClassificationSource, ClassificationState,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::ai::AiClassifier;
    pub use crate::classifier::HazardClassifier;
    pub use crate::fallback::FallbackClassifier;
    pub use crate::keyword::KeywordClassifier;
    pub use crate::orchestrator::{ClassificationOrchestrator, ClassificationSource};
}
