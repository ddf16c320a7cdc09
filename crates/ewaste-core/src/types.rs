//! Core types for hazard classification

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Step inserted when a producer yields no recycling steps at all.
pub const CERTIFIED_FACILITY_STEP: &str = "Take the device to a certified e-waste recycling facility.";

/// Coarse disposal-risk severity of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardLevel {
    Low,
    Medium,
    High,
}

impl HazardLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for HazardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HazardLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(Error::parse(format!("unknown hazard level '{}'", other))),
        }
    }
}

/// A named hazardous substance and what makes it dangerous
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardMaterial {
    pub element: Cow<'static, str>,
    pub risk: Cow<'static, str>,
}

impl HazardMaterial {
    /// Build a material from static text, usable in `const` tables
    pub const fn new(element: &'static str, risk: &'static str) -> Self {
        Self {
            element: Cow::Borrowed(element),
            risk: Cow::Borrowed(risk),
        }
    }
}

/// The unified output of every classification path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub hazard_level: HazardLevel,

    /// Material names, in presentation order
    pub hazardous_materials: Vec<String>,

    pub environmental_impact: String,

    pub safety_precautions: Vec<String>,

    /// Presentation order; always at least one entry
    pub recycling_steps: Vec<String>,

    pub component_breakdown: String,

    pub disposal_warnings: Vec<String>,

    /// Currency-range description of recoverable material
    pub estimated_value: String,

    /// Comparative recycling vs landfill impact
    pub carbon_footprint: String,
}

impl ClassificationResult {
    /// Guarantee the non-empty recycling step invariant
    pub fn ensure_recycling_step(mut self) -> Self {
        if self.recycling_steps.is_empty() {
            self.recycling_steps.push(CERTIFIED_FACILITY_STEP.to_string());
        }
        self
    }
}

/// Device metadata submitted for classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSubmission {
    pub name: String,
    pub category: String,
}

impl DeviceSubmission {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Reject blank fields before they reach a classifier
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("device name is required"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::validation("device category is required"));
        }
        Ok(())
    }
}

/// A chat message sent to the completion provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}
