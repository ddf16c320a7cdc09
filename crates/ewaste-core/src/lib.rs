//! E-Waste Core
//!
//! Core types, traits, and utilities shared across the e-waste hazard
//! classification service.
//!
//! This crate provides:
//! - The classification result shape and its hazard vocabulary
//! - Error types and result handling
//! - The completion-provider trait used by AI-backed classification
//! - An OpenAI-compatible chat completions provider

pub mod adapters;
pub mod error;
pub mod provider;
pub mod types;

pub use adapters::{OpenAiProvider, OpenAiSettings};
pub use error::{Error, Result};
pub use provider::{CompletionProvider, CompletionRequest};
pub use types::{
    ChatMessage, ClassificationResult, DeviceSubmission, HazardLevel, HazardMaterial,
    CERTIFIED_FACILITY_STEP,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::provider::{CompletionProvider, CompletionRequest};
    pub use crate::types::{ClassificationResult, DeviceSubmission, HazardLevel, HazardMaterial};
}
